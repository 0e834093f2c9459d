//! `qaboard login` / `qaboard signup`

use anyhow::{Context, Result};
use qaboard_core::api::ApiClient;

/// Prints the token so it can be exported as `QABOARD_TOKEN`.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<()> {
    let token = client
        .login(email, password)
        .await
        .context("Login failed")?;
    println!("{}", token.as_str());
    Ok(())
}

pub async fn signup(client: &ApiClient, email: &str, password: &str) -> Result<()> {
    client
        .signup(email, password)
        .await
        .context("Signup failed")?;
    println!("Signup successful");
    Ok(())
}
