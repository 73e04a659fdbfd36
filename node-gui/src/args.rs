//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process, str::FromStr};

use bitcoin::Network;
use node_ui::Mode;

use crate::dir::NodeDirectory;

pub const DEFAULT_EXPORT_ICON_SIZE: u32 = 64;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(NodeDirectory),
    Network(Network),
    Mode(Mode),
    DisableWallet,
    ExportIcons(PathBuf),
    IconSize(u32),
}

/// Parse command-line arguments.
///
/// `args` includes the program name at `args[0]`.
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = std::path::Path::new(args.first().map(String::as_str).unwrap_or_default())
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("node-gui");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>        Path of the data directory
    --desktop               Run in desktop mode
    --mobile                Run in mobile mode
    --disablewallet         Start with the wallet disabled
    --export-icons <DIR>    Render every icon as PNG into DIR and exit
    --icon-size <PX>        Size of the exported icons (default {DEFAULT_EXPORT_ICON_SIZE})
    -v, --version           Display {app_name} version
    -h, --help              Print help
    --bitcoin               Use bitcoin network (default)
    --testnet               Use testnet network
    --testnet4              Use testnet4 network
    --signet                Use signet network
    --regtest               Use regtest network
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--datadir" => {
                let path = iter.next().ok_or("missing arg to --datadir")?;
                res.push(Arg::DatadirPath(NodeDirectory::new(PathBuf::from(path))));
            }
            "--export-icons" => {
                let path = iter.next().ok_or("missing arg to --export-icons")?;
                res.push(Arg::ExportIcons(PathBuf::from(path)));
            }
            "--icon-size" => {
                let size = iter.next().ok_or("missing arg to --icon-size")?;
                let size = u32::from_str(size)
                    .ok()
                    .filter(|s| *s > 0 && *s <= i32::MAX as u32)
                    .ok_or_else(|| format!("invalid icon size '{}'", size))?;
                res.push(Arg::IconSize(size));
            }
            "--desktop" => res.push(Arg::Mode(Mode::Desktop)),
            "--mobile" => res.push(Arg::Mode(Mode::Mobile)),
            "--disablewallet" => res.push(Arg::DisableWallet),
            a if a.starts_with("--") => {
                let network = Network::from_str(a.trim_start_matches("--"))?;
                res.push(Arg::Network(network));
            }
            a => return Err(format!("unexpected argument '{}'", a).into()),
        }
    }

    Ok(res)
}

/// Values given on the command line, each one at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub datadir: Option<NodeDirectory>,
    pub network: Option<Network>,
    pub mode: Option<Mode>,
    pub disable_wallet: bool,
    pub export_icons: Option<PathBuf>,
    pub icon_size: Option<u32>,
}

impl CliOptions {
    pub fn from_args(args: Vec<Arg>) -> Result<Self, Box<dyn Error>> {
        let mut options = CliOptions::default();
        for arg in args {
            match arg {
                Arg::DatadirPath(dir) => set_once(&mut options.datadir, dir, "--datadir")?,
                Arg::Network(network) => set_once(&mut options.network, network, "network")?,
                Arg::Mode(mode) => set_once(&mut options.mode, mode, "mode")?,
                Arg::DisableWallet => options.disable_wallet = true,
                Arg::ExportIcons(dir) => {
                    set_once(&mut options.export_icons, dir, "--export-icons")?
                }
                Arg::IconSize(size) => set_once(&mut options.icon_size, size, "--icon-size")?,
            }
        }
        if options.icon_size.is_some() && options.export_icons.is_none() {
            return Err("--icon-size requires --export-icons".into());
        }
        Ok(options)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, name: &str) -> Result<(), Box<dyn Error>> {
    if slot.is_some() {
        return Err(format!("{} specified more than once", name).into());
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("node-gui")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(args(&["--meth"]), "0.1.0").is_err());
        assert!(parse_args(args(&["--datadir"]), "0.1.0").is_err());
        assert!(parse_args(args(&["--export-icons"]), "0.1.0").is_err());
        assert!(parse_args(args(&["--icon-size", "0"]), "0.1.0").is_err());
        assert!(parse_args(args(&["--icon-size", "big"]), "0.1.0").is_err());
        assert!(parse_args(args(&["signet"]), "0.1.0").is_err());
        assert_eq!(
            Some(vec![Arg::Network(Network::Regtest)]),
            parse_args(args(&["--regtest"]), "0.1.0").ok()
        );
        assert_eq!(
            Some(vec![Arg::Network(Network::Testnet4)]),
            parse_args(args(&["--testnet4"]), "0.1.0").ok()
        );
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(NodeDirectory::new(PathBuf::from("hello"))),
                Arg::Network(Network::Testnet),
                Arg::Mode(Mode::Mobile),
                Arg::DisableWallet,
            ]),
            parse_args(
                args(&[
                    "--datadir",
                    "hello",
                    "--testnet",
                    "--mobile",
                    "--disablewallet"
                ]),
                "0.1.0"
            )
            .ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ExportIcons(PathBuf::from("out")),
                Arg::IconSize(128)
            ]),
            parse_args(args(&["--export-icons", "out", "--icon-size", "128"]), "0.1.0").ok()
        );
    }

    #[test]
    fn test_cli_options() {
        let options = CliOptions::from_args(vec![
            Arg::Network(Network::Signet),
            Arg::Mode(Mode::Desktop),
            Arg::DisableWallet,
        ])
        .unwrap();
        assert_eq!(options.network, Some(Network::Signet));
        assert_eq!(options.mode, Some(Mode::Desktop));
        assert!(options.disable_wallet);
        assert_eq!(options.datadir, None);

        assert!(CliOptions::from_args(vec![
            Arg::Network(Network::Signet),
            Arg::Network(Network::Regtest)
        ])
        .is_err());
        assert!(
            CliOptions::from_args(vec![Arg::Mode(Mode::Desktop), Arg::Mode(Mode::Mobile)])
                .is_err()
        );
        assert!(CliOptions::from_args(vec![Arg::IconSize(32)]).is_err());
        assert!(CliOptions::from_args(vec![]).unwrap() == CliOptions::default());
    }
}
