use clap::{ArgAction, Parser};

/// Create a Meetup event and announce it on Slack and LinkedIn.
///
/// Everything about the event comes from environment variables (or `.env`).
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print copy-paste templates instead of calling the Meetup API.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "share_only")]
    pub template: bool,

    /// With --template, do not ask for the created event URL.
    #[arg(long, action = ArgAction::SetTrue, requires = "template")]
    pub no_prompt: bool,

    /// Share an existing Meetup event instead of creating a new one.
    #[arg(long, value_name = "EVENT_ID")]
    pub share_only: Option<String>,

    /// Skip the startup banner.
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_banner: bool,
}

/// What a run does, derived from the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Publish,
    ShareOnly { event_id: String },
    Template { prompt: bool },
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.template {
            Mode::Template {
                prompt: !self.no_prompt,
            }
        } else if let Some(event_id) = &self.share_only {
            Mode::ShareOnly {
                event_id: event_id.clone(),
            }
        } else {
            Mode::Publish
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("meetop").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_is_publish() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.mode(), Mode::Publish);
        assert!(!cli.no_banner);
    }

    #[test]
    fn test_template_modes() {
        assert_eq!(
            parse(&["--template"]).unwrap().mode(),
            Mode::Template { prompt: true }
        );
        assert_eq!(
            parse(&["--template", "--no-prompt"]).unwrap().mode(),
            Mode::Template { prompt: false }
        );
    }

    #[test]
    fn test_share_only_takes_event_id() {
        assert_eq!(
            parse(&["--share-only", "305", "--no-banner"]).unwrap().mode(),
            Mode::ShareOnly {
                event_id: "305".into()
            }
        );
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        assert!(parse(&["--template", "--share-only", "305"]).is_err());
        assert!(parse(&["--no-prompt"]).is_err());
        assert!(parse(&["--share-only"]).is_err());
    }
}
