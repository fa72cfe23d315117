use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_agencies;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::fit_width;

fn or_dash(v: &Option<String>) -> String {
    match v {
        Some(s) if !s.trim().is_empty() => s.clone(),
        _ => format!("{GREY}--{RESET}"),
    }
}

/// List every partner agency.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let agencies = load_agencies(&pool)?;

    if agencies.is_empty() {
        println!("No agencies found.");
        return Ok(());
    }

    println!("🏢 Agencies:\n");
    println!(
        "{:>4}  {}  {}  {}  CONTACT",
        "ID",
        fit_width("NAME", 30),
        fit_width("CATEGORY", 14),
        fit_width("ADDRESS", 28)
    );

    for a in &agencies {
        let category = a.category.clone().unwrap_or_default();
        let address = a.location_address.clone().unwrap_or_default();
        let contact = match (&a.contact_name, &a.contact_phone) {
            (Some(n), Some(p)) => format!("{n} ({p})"),
            (name, None) => or_dash(name),
            (None, phone) => or_dash(phone),
        };

        println!(
            "{:>4}  {}  {}  {}  {}",
            a.agency_id,
            fit_width(&a.agency_name, 30),
            fit_width(&category, 14),
            fit_width(&address, 28),
            contact
        );

        if let Some(url) = a.website_url.as_deref().filter(|u| !u.is_empty()) {
            println!("      {GREY}{url}{RESET}");
        }
    }

    Ok(())
}
