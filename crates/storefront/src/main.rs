use anyhow::Context;

use shanga_storefront::{QueryArgs, StorefrontConfig, build_supplier, execute};

fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env().context("invalid configuration")?;
    shanga_observability::init(config.log_format);

    let args = QueryArgs::from_args(std::env::args().skip(1))?;
    let supplier = build_supplier(&config)?;
    let listing = execute(supplier.as_ref(), &args)?;

    let rendered = serde_json::to_string_pretty(&listing).context("failed to encode listing")?;
    println!("{rendered}");
    Ok(())
}
