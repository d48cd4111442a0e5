use tracing::{error, info};

use tienda::scenarios::{self, Report};
use tienda::shop::{setup_tracing, ShopConfig, ShopError};

fn main() -> Result<(), ShopError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting shop scenarios");

    let config = ShopConfig::default();

    let storefront = tracing::info_span!("storefront").in_scope(|| scenarios::storefront(config));
    let storefront = match storefront {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Storefront scenario failed");
            return Err(e);
        }
    };
    print_report(&storefront);

    println!();

    let summary = tracing::info_span!("order_summary").in_scope(|| scenarios::order_summary(config));
    let summary = match summary {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Order summary scenario failed");
            return Err(e);
        }
    };
    print_report(&summary);

    info!("Scenarios completed successfully");
    Ok(())
}

fn print_report(report: &Report) {
    println!("=== {} ===", report.title);
    for line in &report.lines {
        println!("{line}");
    }
    info!(
        title = report.title,
        products = report.shop.products().count(),
        lines = report.lines.len(),
        "Report printed"
    );
}
