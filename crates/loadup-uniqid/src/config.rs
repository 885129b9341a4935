use anyhow::bail;
use clap::Parser;

/// Runtime configuration for the `loadup-uniqid` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "loadup-uniqid",
    version,
    about = "Prints process-unique loadup correlation IDs, one per line"
)]
pub struct CliArgs {
    /// Number of IDs to print.
    ///
    /// Environment variable: `UNIQID_COUNT`
    #[arg(short = 'n', long, env = "UNIQID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Print the 32 character hex digest of each ID instead of the plain ID.
    ///
    /// Environment variable: `UNIQID_HASH`
    #[arg(long, env = "UNIQID_HASH", default_value_t = false)]
    pub hash: bool,

    /// Number of threads sharing the generator.
    ///
    /// Each thread gets its own context field, so this also shows how IDs
    /// from concurrent callers differ.
    ///
    /// Environment variable: `UNIQID_THREADS`
    #[arg(short, long, env = "UNIQID_THREADS", default_value_t = 1)]
    pub threads: usize,

    /// Skip the host address lookup and use the start time as the host
    /// field. Useful in sandboxes without name resolution.
    ///
    /// Environment variable: `UNIQID_NO_HOST_LOOKUP`
    #[arg(long, env = "UNIQID_NO_HOST_LOOKUP", default_value_t = false)]
    pub no_host_lookup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqIdConfig {
    pub count: usize,
    pub hash: bool,
    pub threads: usize,
    pub host_lookup: bool,
}

impl TryFrom<CliArgs> for UniqIdConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("UNIQID_COUNT must be greater than 0");
        }

        if args.threads == 0 {
            bail!("UNIQID_THREADS must be greater than 0");
        }

        if args.threads > args.count {
            bail!(
                "UNIQID_THREADS ({}) exceeds UNIQID_COUNT ({}); some threads would print nothing",
                args.threads,
                args.count
            );
        }

        Ok(Self {
            count: args.count,
            hash: args.hash,
            threads: args.threads,
            host_lookup: !args.no_host_lookup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<UniqIdConfig> {
        let args = CliArgs::try_parse_from(["loadup-uniqid"].iter().chain(args).copied())?;
        UniqIdConfig::try_from(args)
    }

    #[test]
    fn defaults_print_one_plain_id() {
        let config = parse(&[]).unwrap();
        assert_eq!(
            config,
            UniqIdConfig {
                count: 1,
                hash: false,
                threads: 1,
                host_lookup: true,
            }
        );
    }

    #[test]
    fn flags_are_parsed() {
        let config = parse(&["-n", "10", "--hash", "--threads", "4", "--no-host-lookup"]).unwrap();
        assert_eq!(config.count, 10);
        assert!(config.hash);
        assert_eq!(config.threads, 4);
        assert!(!config.host_lookup);
    }

    #[test]
    fn rejects_zero_count_and_threads() {
        assert!(parse(&["--count", "0"]).is_err());
        assert!(parse(&["--threads", "0"]).is_err());
    }

    #[test]
    fn rejects_more_threads_than_ids() {
        let err = parse(&["--count", "2", "--threads", "3"]).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }
}
