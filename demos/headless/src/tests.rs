//! Command-line parsing tests for nav-headless.

use std::path::PathBuf;

use clap::Parser;

use crate::{DEFAULT_CONFIG_PATH, Options};

fn parse(args: &[&str]) -> Result<Options, clap::Error> {
    Options::try_parse_from(std::iter::once("nav-headless").chain(args.iter().copied()))
}

#[cfg(test)]
mod options {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!opts.fast);
        assert!(!opts.random);
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn positional_config_and_flags() {
        let opts = parse(&["custom.toml", "--fast", "--seed", "17"]).unwrap();
        assert_eq!(opts.config, PathBuf::from("custom.toml"));
        assert!(opts.fast);
        assert_eq!(opts.seed, Some(17));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--seed", "abc"]).is_err());
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["--seed", "1", "--random"]).is_err());
    }
}
