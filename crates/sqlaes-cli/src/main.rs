//! Command-line interface for `sqlaes`.

#![forbid(unsafe_code)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sqlaes_core::DerivedKey;
use sqlaes_expr::{aes_decrypt, aes_encrypt, Datum};

/// MySQL-compatible AES_ENCRYPT / AES_DECRYPT.
#[derive(Parser)]
#[command(name = "sqlaes", version, author, about)]
struct Cli {
    /// Log at debug level (otherwise RUST_LOG, default warn).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct KeyArgs {
    /// Key material; any length, folded to 128 bits.
    #[arg(long, value_name = "KEY")]
    key: String,
    /// Treat --key as hex-encoded bytes.
    #[arg(long, default_value_t = false)]
    key_hex: bool,
}

#[derive(Args)]
struct InputArgs {
    /// Read input from a file instead of the positional argument.
    #[arg(long, value_name = "FILE", conflicts_with = "value")]
    input: Option<PathBuf>,
    /// Input value given inline.
    #[arg(required_unless_present = "input")]
    value: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Uppercase hex, like `HEX(AES_ENCRYPT(..))`.
    Hex,
    /// Lossy UTF-8 text.
    Text,
    /// Raw bytes on stdout.
    Raw,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a value, printing the ciphertext.
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        input: InputArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Hex)]
        format: Format,
    },
    /// Decrypt a ciphertext; prints NULL when it does not decrypt cleanly.
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        input: InputArgs,
        /// Input is raw ciphertext bytes rather than hex text.
        #[arg(long, default_value_t = false)]
        raw_input: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the folded 128-bit key in hex.
    DeriveKey {
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Encrypt and decrypt random data under a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Encrypt { key, input, format } => cmd_encrypt(&key, &input, format),
        Commands::Decrypt {
            key,
            input,
            raw_input,
            format,
        } => cmd_decrypt(&key, &input, raw_input, format),
        Commands::DeriveKey { key } => cmd_derive_key(&key),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn cmd_encrypt(key: &KeyArgs, input: &InputArgs, format: Format) -> Result<()> {
    let key = key.to_datum()?;
    let plain = Datum::Bytes(input.read()?);
    let out = aes_encrypt(&plain, &key).context("evaluate aes_encrypt")?;
    write_datum(&mut io::stdout().lock(), &out, format)
}

fn cmd_decrypt(key: &KeyArgs, input: &InputArgs, raw_input: bool, format: Format) -> Result<()> {
    let key = key.to_datum()?;
    let bytes = input.read()?;
    let crypt = if raw_input {
        bytes
    } else {
        let text = String::from_utf8(bytes).context("ciphertext hex is not UTF-8")?;
        hex::decode(text.trim()).context("decode ciphertext hex")?
    };
    debug!("decrypting {} ciphertext bytes", crypt.len());
    let out = aes_decrypt(&Datum::Bytes(crypt), &key).context("evaluate aes_decrypt")?;
    write_datum(&mut io::stdout().lock(), &out, format)
}

fn cmd_derive_key(key: &KeyArgs) -> Result<()> {
    let raw = key.bytes()?;
    let derived = DerivedKey::derive(&raw);
    println!("{}", hex::encode(derived.as_bytes()));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; rng.gen_range(1..=40)];
    let mut plain = vec![0u8; rng.gen_range(0..=64)];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut plain);
    info!(
        "demo with {}-byte key, {}-byte plaintext",
        key.len(),
        plain.len()
    );

    let key = Datum::Bytes(key);
    let plain = Datum::Bytes(plain);
    let crypt = aes_encrypt(&plain, &key)?;
    let back = aes_decrypt(&crypt, &key)?;

    let show = |d: &Datum| d.to_hex_upper().unwrap_or_else(|| "NULL".to_owned());
    println!("key:        {}", show(&key));
    println!("plaintext:  {}", show(&plain));
    println!("ciphertext: {}", show(&crypt));
    println!("decrypted:  {}", show(&back));
    if back != plain {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

impl KeyArgs {
    fn bytes(&self) -> Result<Vec<u8>> {
        if self.key_hex {
            hex::decode(self.key.trim()).context("decode key hex")
        } else {
            Ok(self.key.as_bytes().to_vec())
        }
    }

    fn to_datum(&self) -> Result<Datum> {
        self.bytes().map(Datum::Bytes)
    }
}

impl InputArgs {
    fn read(&self) -> Result<Vec<u8>> {
        match (&self.input, &self.value) {
            (Some(path), _) => fs::read(path).with_context(|| format!("read {}", path.display())),
            (None, Some(value)) => Ok(value.as_bytes().to_vec()),
            (None, None) => bail!("no input given"),
        }
    }
}

fn write_datum(out: &mut impl Write, datum: &Datum, format: Format) -> Result<()> {
    let Some(bytes) = datum.to_bytes() else {
        writeln!(out, "NULL").context("write output")?;
        return out.flush().context("flush output");
    };
    let written = match format {
        Format::Hex => writeln!(out, "{}", hex::encode_upper(&bytes)),
        Format::Text => writeln!(out, "{}", String::from_utf8_lossy(&bytes)),
        Format::Raw => out.write_all(&bytes),
    };
    written.context("write output")?;
    out.flush().context("flush output")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn key_hex_decodes() {
        let args = KeyArgs {
            key: "31323334".to_owned(),
            key_hex: true,
        };
        assert_eq!(args.bytes().unwrap(), b"1234");
        let plain = KeyArgs {
            key: "31323334".to_owned(),
            key_hex: false,
        };
        assert_eq!(plain.bytes().unwrap(), b"31323334");
    }

    #[test]
    fn parses_decrypt_command() {
        let cli = Cli::try_parse_from([
            "sqlaes",
            "decrypt",
            "--key",
            "1234567890123456",
            "697BFE9B3F8C2F289DD82C88C7BC95C4",
        ])
        .unwrap();
        let Commands::Decrypt {
            input,
            format,
            raw_input,
            ..
        } = cli.command
        else {
            panic!("expected decrypt");
        };
        assert_eq!(format, Format::Text);
        assert!(!raw_input);
        assert_eq!(input.read().unwrap(), b"697BFE9B3F8C2F289DD82C88C7BC95C4");
    }

    #[test]
    fn null_result_prints_null() {
        for format in [Format::Hex, Format::Text, Format::Raw] {
            let mut out = Vec::new();
            write_datum(&mut out, &Datum::Null, format).unwrap();
            assert_eq!(out, b"NULL\n");
        }
    }

    #[test]
    fn failed_decrypt_prints_null() {
        let crypt = Datum::from("str");
        let result = aes_decrypt(&crypt, &Datum::from("str")).unwrap();
        let mut out = Vec::new();
        write_datum(&mut out, &result, Format::Text).unwrap();
        assert_eq!(out, b"NULL\n");
    }

    #[test]
    fn output_formats() {
        let datum = Datum::Bytes(vec![0xab, b'h', b'i']);
        let mut hex_out = Vec::new();
        write_datum(&mut hex_out, &datum, Format::Hex).unwrap();
        assert_eq!(hex_out, b"AB6869\n");

        let mut raw_out = Vec::new();
        write_datum(&mut raw_out, &datum, Format::Raw).unwrap();
        assert_eq!(raw_out, vec![0xab, b'h', b'i']);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(7));
        let mut b = seeded_rng(Some(7));
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
