#[cfg(test)]
mod tests {
    use crate::cli::{BundleKind, Cli, Command};
    use clap::Parser;
    use sprig_targets::BundlerConfigType;
    use std::path::PathBuf;

    #[test]
    fn targets_defaults_to_csr() {
        let cli = Cli::try_parse_from(["sprig", "targets"]).unwrap();
        match cli.command {
            Command::Targets(args) => assert_eq!(args.kind, BundleKind::Csr),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn targets_type_flag() {
        let cli = Cli::try_parse_from(["sprig", "targets", "--type", "ssr"]).unwrap();
        match cli.command {
            Command::Targets(args) => {
                assert_eq!(BundlerConfigType::from(args.kind), BundlerConfigType::Ssr);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_bundle_type() {
        assert!(Cli::try_parse_from(["sprig", "targets", "--type", "spa"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sprig",
            "css",
            "--dev",
            "--cwd",
            "app",
            "--config",
            "sprig.prod.toml",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.global.cwd, Some(PathBuf::from("app")));
        assert_eq!(cli.global.config, Some(PathBuf::from("sprig.prod.toml")));
        assert!(matches!(cli.command, Command::Css(args) if args.dev));
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let err = Cli::try_parse_from(["sprig", "-v", "-q", "routes"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn routes_overrides() {
        let cli = Cli::try_parse_from([
            "sprig",
            "routes",
            "--root",
            "app/pages",
            "--component-prefix",
            "~/",
        ])
        .unwrap();

        match cli.command {
            Command::Routes(args) => {
                assert_eq!(args.root, Some(PathBuf::from("app/pages")));
                assert_eq!(args.component_prefix.as_deref(), Some("~/"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
