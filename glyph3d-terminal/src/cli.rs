use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::Context;
use clap::ValueHint;
use nalgebra::{Scalar, Scale3, Vector3};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        long,
        default_value = "warn,glyph3d_core=info,glyph3d_terminal=info",
        env = "GLYPH3D_LOG"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Full)]
    pub log_format: LogFormat,
    /// Write logs to this file; nothing is logged without it
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,
    /// TOML file overriding the render configuration
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    /// Light position for shadows
    #[arg(long, value_parser = parse_vec3::<f32>, value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub light: Option<Vector3<f32>>,
    /// Scaling applied to each STL mesh after loading
    #[arg(
        short,
        long,
        default_value = "1,1,1",
        value_parser = parse_scale3::<f32>,
        value_name = "X,Y,Z"
    )]
    pub mesh_scale: Scale3<f32>,
    /// Extra STL meshes to show next to the built-in ones
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub stl: Vec<PathBuf>,
}

type ParseError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn parse_vec3<R: FromStr>(s: &str) -> Result<Vector3<R>, ParseError>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let mut split = s.trim().split(',');
    let mut next = || {
        split
            .next()
            .ok_or_else(|| ParseError::from(format!("expected X,Y,Z, got {s:?}")))
    };
    let x = R::from_str(next()?.trim())?;
    let y = R::from_str(next()?.trim())?;
    let z = R::from_str(next()?.trim())?;
    if split.next().is_some() {
        return Err(format!("expected X,Y,Z, got {s:?}").into());
    }
    Ok(nalgebra::vector![x, y, z])
}

fn parse_scale3<R: FromStr + Scalar>(s: &str) -> Result<Scale3<R>, ParseError>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    parse_vec3::<R>(s).map(Scale3::from)
}

/// Send log output to `path`; the terminal itself is busy with the scene
pub(crate) fn initialize_tracing(
    path: &Path,
    log_filter: &str,
    log_format: LogFormat,
) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let tsub = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_vec3() {
        let v = parse_vec3::<f32>(" 1, -100,2.5").unwrap();
        assert_eq!(v, nalgebra::vector![1.0, -100.0, 2.5]);
        assert!(parse_vec3::<f32>("1,2").is_err());
        assert!(parse_vec3::<f32>("1,2,3,4").is_err());
        assert!(parse_vec3::<f32>("1,y,3").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["glyph3d"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.stl.is_empty());
        assert!(cli.light.is_none());
        assert_eq!(cli.mesh_scale, Scale3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_cli_repeated_stl() {
        let cli = Cli::try_parse_from([
            "glyph3d",
            "--stl",
            "a.stl",
            "--stl",
            "b.stl",
            "--light",
            "2,-50,1",
            "--mesh-scale",
            "0.1,0.1,0.1",
        ])
        .unwrap();
        assert_eq!(cli.stl, vec![PathBuf::from("a.stl"), PathBuf::from("b.stl")]);
        assert_eq!(cli.light, Some(nalgebra::vector![2.0, -50.0, 1.0]));
        assert_eq!(cli.mesh_scale, Scale3::new(0.1, 0.1, 0.1));
    }
}
