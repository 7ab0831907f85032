use std::io::Write;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use peerid_core::{PeerToken, SemanticVersion, Style};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// The loglevel. RUST_LOG takes precedence if set.
    #[arg(value_enum, short = 'v', long = "log-level")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    subcommand: SubCommand,
}

#[derive(Parser)]
struct DecodeOpts {
    /// The peer id. May be "%nn" escaped as it appears in tracker announce URLs.
    peer_id: String,

    /// Treat the peer id as 40 hex characters.
    #[arg(long)]
    hex: bool,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct EncodeOpts {
    /// Client code: two characters for Azureus style, one letter for Shadow style.
    #[arg(short, long)]
    code: String,

    /// Client version as major.minor.patch.
    #[arg(short = 'V', long = "client-version")]
    version: SemanticVersion,

    /// Peer id style, "az" or "shadow".
    #[arg(short, long, default_value = "az")]
    style: Style,

    /// How many peer ids to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed the random filler for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
enum SubCommand {
    /// Show which client produced a peer id.
    Decode(DecodeOpts),
    /// Generate peer ids for a client.
    Encode(EncodeOpts),
}

#[derive(Serialize)]
struct EncodedPeerId {
    peer_id: PeerToken,
    hex: String,
    url_encoded: String,
}

fn init_logging(opts: &Opts) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_rust_log = match opts.log_level.as_ref() {
        Some(level) => match level {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        },
        None => "warn",
    };
    let stderr_filter = match std::env::var("RUST_LOG").ok() {
        Some(rust_log) => EnvFilter::builder()
            .parse(&rust_log)
            .expect("can't parse RUST_LOG"),
        None => EnvFilter::builder()
            .parse(default_rust_log)
            .expect("can't parse default_rust_log"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(stderr_filter)
        .init();
}

/// Returns false if the peer id matches no known style.
fn decode(opts: &DecodeOpts, out: &mut impl Write) -> anyhow::Result<bool> {
    let decoded = if opts.hex {
        let token = PeerToken::from_hex(&opts.peer_id).context("invalid hex peer id")?;
        peerid_core::decode(&token)
    } else {
        peerid_core::decode(opts.peer_id.as_str())
    };
    let client = decoded.with_context(|| format!("error decoding peer id {:?}", opts.peer_id))?;

    let client = match client {
        Some(client) => client,
        None => {
            info!(peer_id = %opts.peer_id, "peer id matches no known style");
            writeln!(out, "no match")?;
            return Ok(false);
        }
    };

    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&client)?)?;
    } else {
        writeln!(
            out,
            "{} ({}) {} [{} style]",
            client.name.unwrap_or("unknown client"),
            client.code,
            client.version,
            client.style
        )?;
    }
    Ok(true)
}

fn encode(opts: &EncodeOpts, out: &mut impl Write) -> anyhow::Result<()> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!(code = %opts.code, version = %opts.version, style = %opts.style, "encoding");

    let mut encoded = Vec::with_capacity(opts.count);
    for _ in 0..opts.count {
        let peer_id =
            peerid_core::encode_with_rng(&opts.code, &opts.version, opts.style, &mut rng)
                .with_context(|| {
                    format!(
                        "can't encode {:?} version {} as {} style",
                        opts.code, opts.version, opts.style
                    )
                })?;
        encoded.push(EncodedPeerId {
            peer_id,
            hex: peer_id.as_string(),
            url_encoded: peer_id.url_encoded(),
        });
    }

    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&encoded)?)?;
    } else {
        for e in encoded {
            writeln!(out, "{}\t{}\t{}", e.peer_id, e.hex, e.url_encoded)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    init_logging(&opts);

    let mut stdout = std::io::stdout().lock();
    match &opts.subcommand {
        SubCommand::Decode(decode_opts) => {
            if !decode(decode_opts, &mut stdout)? {
                stdout.flush()?;
                std::process::exit(1);
            }
            Ok(())
        }
        SubCommand::Encode(encode_opts) => encode(encode_opts, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use peerid_core::{PeerToken, SemanticVersion, Style};

    use super::{DecodeOpts, EncodeOpts, Opts, SubCommand, decode, encode};

    fn decode_opts(peer_id: &str) -> DecodeOpts {
        DecodeOpts {
            peer_id: peer_id.to_owned(),
            hex: false,
            json: false,
        }
    }

    fn encode_opts(code: &str, style: Style, seed: u64) -> EncodeOpts {
        EncodeOpts {
            code: code.to_owned(),
            version: SemanticVersion::new(5, 8, 11),
            style,
            count: 3,
            seed: Some(seed),
            json: false,
        }
    }

    fn run_decode(opts: &DecodeOpts) -> (bool, String) {
        let mut out = Vec::new();
        let matched = decode(opts, &mut out).unwrap();
        (matched, String::from_utf8(out).unwrap())
    }

    fn run_encode(opts: &EncodeOpts) -> String {
        let mut out = Vec::new();
        encode(opts, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Opts::command().debug_assert();
    }

    #[test]
    fn test_parse_encode() {
        let opts = Opts::parse_from([
            "peerid", "encode", "-c", "S", "-V", "5.8.11", "-s", "shadow", "--seed", "3",
        ]);
        match opts.subcommand {
            SubCommand::Encode(e) => {
                assert_eq!(e.style, peerid_core::Style::Shadow);
                assert_eq!(e.version.to_string(), "5.8.11");
                assert_eq!(e.count, 1);
            }
            _ => panic!("expected encode"),
        }
        assert!(
            Opts::try_parse_from(["peerid", "encode", "-c", "S", "-V", "5.8", "-s", "shadow"])
                .is_err()
        );
        assert!(
            Opts::try_parse_from(["peerid", "encode", "-c", "S", "-V", "5.8.1", "-s", "mainline"])
                .is_err()
        );
    }

    #[test]
    fn test_decode_text() {
        for peer_id in ["-AZ2060-4f2f1f2f1f2f", "%2DAZ2060%2D4f2f1f2f1f2f"] {
            let (matched, out) = run_decode(&decode_opts(peer_id));
            assert!(matched);
            assert_eq!(out, "Azureus (AZ) 2.0.60 [az style]\n");
        }
        let (matched, out) = run_decode(&decode_opts("S58B-----fffffffffff"));
        assert!(matched);
        assert_eq!(out, "Shadow's client (S) 5.8.11 [shadow style]\n");
    }

    #[test]
    fn test_decode_hex() {
        let raw = b"-qB4650-\x00\x01\x02\x03\xf0\xf1\xf2\xf3\xfd\xfe\xff\x7f";
        let token = PeerToken::from(*raw);
        let opts = DecodeOpts {
            peer_id: token.as_string(),
            hex: true,
            json: false,
        };
        let (matched, out) = run_decode(&opts);
        assert!(matched);
        assert_eq!(out, "qBittorrent (qB) 4.6.50 [az style]\n");

        let opts = DecodeOpts {
            peer_id: "not hex".to_owned(),
            hex: true,
            json: false,
        };
        assert!(decode(&opts, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_decode_no_match() {
        let (matched, out) = run_decode(&decode_opts("12345678901234567890"));
        assert!(!matched);
        assert_eq!(out, "no match\n");
        assert!(decode(&decode_opts("-AZ2060-"), &mut Vec::new()).is_err());
    }

    #[test]
    fn test_decode_json() {
        let opts = DecodeOpts {
            json: true,
            ..decode_opts("-AZ2060-4f2f1f2f1f2f")
        };
        let (matched, out) = run_decode(&opts);
        assert!(matched);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["code"], "AZ");
        assert_eq!(value["name"], "Azureus");
        assert_eq!(value["version"], "2.0.60");
        assert_eq!(value["style"], "az");
    }

    #[test]
    fn test_encode_rows() {
        let opts = encode_opts("S", Style::Shadow, 3);
        let out = run_encode(&opts);
        assert_eq!(out, run_encode(&opts));

        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 3);
        for row in rows {
            let columns: Vec<&str> = row.split('\t').collect();
            assert_eq!(columns.len(), 3, "{row:?}");
            assert!(columns[0].starts_with("S58B-----"), "{row:?}");
            assert_eq!(columns[1].len(), 40);
            assert_eq!(PeerToken::from_hex(columns[1]).unwrap().to_string(), columns[0]);

            // Both printed forms decode back to the same client.
            for peer_id in [columns[0], columns[2]] {
                let (matched, decoded) = run_decode(&decode_opts(peer_id));
                assert!(matched);
                assert_eq!(decoded, "Shadow's client (S) 5.8.11 [shadow style]\n");
            }
        }
    }

    #[test]
    fn test_encode_json_and_errors() {
        let opts = EncodeOpts {
            json: true,
            ..encode_opts("AZ", Style::Azureus, 1)
        };
        let value: serde_json::Value = serde_json::from_str(&run_encode(&opts)).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        for item in items {
            assert!(item["peer_id"].as_str().unwrap().starts_with("-AZ58"));
            assert_eq!(item["hex"].as_str().unwrap().len(), 40);
        }

        // Azureus style patch versions stop at 99.
        let opts = EncodeOpts {
            version: SemanticVersion::new(9, 9, 100),
            ..encode_opts("AZ", Style::Azureus, 1)
        };
        assert!(encode(&opts, &mut Vec::new()).is_err());
        assert!(encode(&encode_opts("AZ", Style::Shadow, 1), &mut Vec::new()).is_err());
    }
}
