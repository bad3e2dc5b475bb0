use uuid::Uuid;

use crate::auth::{generate_jwt, Claims};

/// `canticle token` - mint a signed bearer token for local development.
/// Requires JWT_SECRET in the environment, same as the server.
pub fn handle(user_id: Option<Uuid>, email: Option<String>) -> anyhow::Result<()> {
    let user_id = user_id.unwrap_or_else(Uuid::new_v4);
    let claims = Claims::new(user_id, email, None, None, None);

    let token = generate_jwt(&claims)?;

    println!("user id: {}", user_id);
    println!("{}", token);
    Ok(())
}
