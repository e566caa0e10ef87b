//! Capacity command implementation

use anyhow::Result;

use habitloop::progression::{level_for, max_habits_for};
use habitloop::tracker::authorize_new_tracking;

/// Report whether another habit fits under the level's capacity
pub fn capacity_command(xp: i64, tracked: u32) -> Result<()> {
    let level = level_for(xp)?;
    let maximum = max_habits_for(level.current);

    match authorize_new_tracking(xp, tracked) {
        Ok(()) => println!(
            "OK: {} of {} habits tracked at level {}",
            tracked, maximum, level.current
        ),
        Err(err) => println!("Rejected: {}", err),
    }

    Ok(())
}
