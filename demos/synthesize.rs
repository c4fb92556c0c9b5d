use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use voxbox::{Client, UserKey};

#[derive(Parser, Debug)]
struct Args {
    #[clap(long)]
    base_url: Option<String>,

    #[clap(long)]
    user_key: Option<String>,

    /// Where the generated identity is persisted when --user-key is absent.
    #[clap(long, default_value = "voxbox-user-key")]
    key_file: PathBuf,

    #[clap(long, default_value = "Hello from the VoxBox Rust client.")]
    text: String,

    /// Voice name; defaults to the first voice the backend offers.
    #[clap(long)]
    voice: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let key = match args.user_key {
        Some(key) => UserKey::from(key),
        None => UserKey::load_or_create(&args.key_file)?,
    };
    let client = Client::from_env(args.base_url, Some(key.clone()))?;

    let init = voxbox::user::init(&client, &key).await?;
    println!("device registered as user #{}", init.user_id);

    let voices = client.voices().await?;
    println!("{} voices available", voices.len());
    let voice = match args.voice {
        Some(voice) => voice,
        None => match voices.first() {
            Some(v) => v.name.clone(),
            None => anyhow::bail!("backend offers no voices"),
        },
    };

    let generated = client.generate(&args.text, &voice).await?;
    match generated.r2_url.or(generated.audio_url) {
        Some(url) => println!("audio ready at {url}"),
        None => println!("generation queued, task {:?}", generated.task_id),
    }
    Ok(())
}
