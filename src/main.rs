use anyhow::Result;
use cardscope::{Catalog, LlmCatalog, ProtocolCatalog, Session};
use std::env;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let data_dir = parse_data_dir(&args);
    let session = build_session(data_dir.as_deref())?;

    if args.iter().any(|a| a == "list") {
        run_list(&session);
        Ok(())
    } else {
        run_ui_mode(session)
    }
}

/// Optional `--data <dir>` flag pointing at a directory with
/// cards.json / protocols.json / llms.json; defaults to the embedded
/// datasets.
fn parse_data_dir(args: &[String]) -> Option<PathBuf> {
    let pos = args.iter().position(|a| a == "--data")?;
    args.get(pos + 1).map(PathBuf::from)
}

fn build_session(data_dir: Option<&Path>) -> Result<Session> {
    let session = match data_dir {
        Some(dir) => {
            println!("📂 Loading datasets from {:?}...", dir);
            Session::new(
                Catalog::from_file(dir.join("cards.json"))?,
                ProtocolCatalog::from_file(dir.join("protocols.json"))?,
                LlmCatalog::from_file(dir.join("llms.json"))?,
            )
        }
        None => Session::with_builtin_data()?,
    };

    println!(
        "✓ Loaded {} cards, {} protocols, {} assistants",
        session.cards().len(),
        session.protocols().len(),
        session.llms().len()
    );

    Ok(session)
}

/// Plain-text catalog dump for scripting and non-TTY use.
fn run_list(session: &Session) {
    println!("\n💳 Cards");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for card in session.filtered_cards() {
        let cashback = match card.cashback_max {
            Some(value) => format!("{value}%"),
            None => "-".to_string(),
        };
        println!(
            "  {:<22} {:<16} {:<10} cashback {:<6} {}",
            card.name,
            card.issuer,
            card.network.as_str(),
            cashback,
            card.regions
        );
    }

    println!("\n🛡️  Privacy Protocols");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for protocol in session.filtered_protocols() {
        println!(
            "  {:<16} {:<6} {:<32} anonymity {}",
            protocol.name,
            protocol.ticker,
            protocol.privacy_tech,
            protocol.anonymity_set.as_str()
        );
    }

    println!("\n🤖 LLM Assistants");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for model in session.filtered_llms() {
        println!(
            "  {:<12} {:<14} {:<20} {}",
            model.name, model.provider, model.primary_strength, model.context_window
        );
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(session: Session) -> Result<()> {
    println!("🖥️  Starting catalog browser... (Press 'q' to quit)\n");

    let mut app = cardscope::ui::App::new(session);
    cardscope::ui::run_ui(&mut app)?;

    println!("\n✅ Browser closed");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_session: Session) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or print the catalog with: cargo run -- list");
    std::process::exit(1);
}
