use anyhow::Context;

use crate::database::{seed, Storage};

/// `canticle seed` - apply migrations and load the catalog fixture set.
pub async fn handle(force: bool) -> anyhow::Result<()> {
    let storage = Storage::connect_from_env().context("failed to open database pool")?;

    storage
        .migrate()
        .await
        .context("failed to run migrations")?;

    seed::run(storage.pool(), force)
        .await
        .context("failed to seed catalog")?;

    println!("Catalog seeded");
    Ok(())
}
