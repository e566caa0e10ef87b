//! Level command implementation

use anyhow::Result;

use habitloop::progression::level_for;

/// Show where an XP total sits on the level curve
pub fn level_command(xp: i64, json: bool) -> Result<()> {
    let level = level_for(xp)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&level)?);
        return Ok(());
    }

    println!("Level {} ({} XP)", level.current, level.xp);
    println!("  This level: {} - {} XP", level.floor_xp, level.ceiling_xp);
    println!(
        "  To level {}: {} XP ({:.0}% there)",
        level.next,
        level.xp_to_next(),
        level.progress() * 100.0
    );

    Ok(())
}
