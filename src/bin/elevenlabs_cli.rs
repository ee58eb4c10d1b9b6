//! elevenlabs-cli: command-line front end for the ElevenLabs client
//!
//! Usage:
//!   elevenlabs-cli sound <text> [-o <file>]                       Generate a sound effect
//!   elevenlabs-cli speak <voice_id> <text> [-o <file>]            Text-to-speech
//!   elevenlabs-cli voices                                         List voice IDs
//!   elevenlabs-cli add-voice <public_user_id> <voice_id> <name>   Add a shared voice

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use elevenlabs_client::{AudioPayload, ElevenLabsClient};

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "sound" => cmd_sound(&args[2..]).await,
        "speak" => cmd_speak(&args[2..]).await,
        "voices" => cmd_voices().await,
        "add-voice" => cmd_add_voice(&args[2..]).await,
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"elevenlabs-cli: ElevenLabs sound, speech and voice tool

USAGE:
    elevenlabs-cli <COMMAND> [OPTIONS]

COMMANDS:
    sound <text> [-o <file>]                      Generate a sound effect (MP3)
    speak <voice_id> <text> [-o <file>]           Synthesize speech (MP3)
    voices                                        List voice IDs, one per line
    add-voice <public_user_id> <voice_id> <name>  Add a shared voice to the account
    version                                       Show version information
    help                                          Show this help message

Audio is written to stdout unless -o/--output is given.

ENVIRONMENT:
    ELEVENLABS_API_KEY          API key (required)
    ELEVENLABS_BASE_URL         API base URL (default https://api.elevenlabs.io/v1)
    ELEVENLABS_TIMEOUT_SECS     Request timeout in seconds (default 60)
    RUST_LOG                    Log filter, e.g. elevenlabs_client=debug"#
    );
}

fn cmd_version() {
    println!("elevenlabs-cli {}", env!("CARGO_PKG_VERSION"));
}

/// Split `-o/--output <file>` out of the positional arguments.
fn split_output(args: &[String]) -> anyhow::Result<(Vec<&str>, Option<PathBuf>)> {
    let mut positional = Vec::new();
    let mut output = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => match iter.next() {
                Some(path) => output = Some(PathBuf::from(path)),
                None => bail!("{arg} requires a file path"),
            },
            _ => positional.push(arg.as_str()),
        }
    }
    Ok((positional, output))
}

fn write_audio(audio: &AudioPayload, output: Option<PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, audio.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {} bytes to {}", audio.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(audio.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

async fn cmd_sound(args: &[String]) -> anyhow::Result<()> {
    let (positional, output) = split_output(args)?;
    let [text] = positional.as_slice() else {
        bail!("usage: elevenlabs-cli sound <text> [-o <file>]");
    };
    let client = ElevenLabsClient::from_env()?;
    let audio = client.generate_sound_effect(text).await?;
    write_audio(&audio, output)
}

async fn cmd_speak(args: &[String]) -> anyhow::Result<()> {
    let (positional, output) = split_output(args)?;
    let [voice_id, text] = positional.as_slice() else {
        bail!("usage: elevenlabs-cli speak <voice_id> <text> [-o <file>]");
    };
    let client = ElevenLabsClient::from_env()?;
    let audio = client.text_to_speech(voice_id, text).await?;
    write_audio(&audio, output)
}

async fn cmd_voices() -> anyhow::Result<()> {
    let client = ElevenLabsClient::from_env()?;
    for id in client.get_voice_ids().await? {
        println!("{id}");
    }
    Ok(())
}

async fn cmd_add_voice(args: &[String]) -> anyhow::Result<()> {
    let [public_user_id, voice_id, new_name] = args else {
        bail!("usage: elevenlabs-cli add-voice <public_user_id> <voice_id> <name>");
    };
    let client = ElevenLabsClient::from_env()?;
    client
        .add_shared_voice(public_user_id, voice_id, new_name)
        .await?;
    println!("Added voice {voice_id} as {new_name:?}");
    Ok(())
}
