//! CLI argument definitions using clap

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "subrecon")]
#[command(version)]
#[command(about = "Passive subdomain discovery with concurrent HTTP and TLS probing", long_about = None)]
pub struct Cli {
    /// Target domain to enumerate (e.g. example.com)
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Maximum number of in-flight probe requests
    #[arg(long, default_value = "100")]
    pub threads: usize,
}

impl Cli {
    /// Normalize the raw target argument into a bare lowercase domain.
    ///
    /// Tolerates surrounding whitespace, an `http://`/`https://` prefix and a
    /// trailing slash, so `https://Example.COM/` becomes `example.com`.
    pub fn normalized_target(&self) -> String {
        let target = self.target.trim();
        let target = target
            .strip_prefix("https://")
            .or_else(|| target.strip_prefix("http://"))
            .unwrap_or(target);
        target.trim_end_matches('/').to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_for(target: &str) -> Cli {
        Cli {
            target: target.to_string(),
            threads: 100,
        }
    }

    #[test]
    fn test_normalized_target_lowercases_and_trims() {
        assert_eq!(cli_for("  Example.COM  ").normalized_target(), "example.com");
    }

    #[test]
    fn test_normalized_target_strips_scheme() {
        assert_eq!(
            cli_for("https://Example.COM/").normalized_target(),
            "example.com"
        );
        assert_eq!(
            cli_for("http://example.com").normalized_target(),
            "example.com"
        );
    }

    #[test]
    fn test_normalized_target_plain_domain_unchanged() {
        assert_eq!(cli_for("example.com").normalized_target(), "example.com");
    }

    #[test]
    fn test_threads_default() {
        let cli = Cli::try_parse_from(["subrecon", "example.com"]).unwrap();
        assert_eq!(cli.threads, 100);
        assert_eq!(cli.target, "example.com");
    }

    #[test]
    fn test_threads_override() {
        let cli = Cli::try_parse_from(["subrecon", "example.com", "--threads", "10"]).unwrap();
        assert_eq!(cli.threads, 10);
    }
}
