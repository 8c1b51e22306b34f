use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::gateway::SqliteGateway;
use crate::db::log;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = Config::load();
    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        cfg.database.clone()
    };

    println!("⚙️  Initializing EquipTrack…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    // opening the gateway creates the schema
    let gateway = SqliteGateway::open(&db_path)?;

    if let Err(e) = log::audit(
        gateway.conn(),
        "init",
        &db_path,
        "Database initialized",
    ) {
        eprintln!("⚠️ Failed to write audit log: {}", e);
    }

    println!("✅ Database initialized at {}", &db_path);
    Ok(())
}
