use rowkit_core::{driver::Driver, Error, Result};

use url::Url;

/// Picks a driver for `url` by its scheme.
pub(super) fn driver(url: &str) -> Result<Box<dyn Driver>> {
    let parsed =
        Url::parse(url).map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "mysql" => mysql(url),
        "sqlite" => sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "mysql")]
fn mysql(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(rowkit_driver_mysql::MySQL::new(url)?))
}

#[cfg(not(feature = "mysql"))]
fn mysql(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::unsupported_feature("`mysql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(rowkit_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::unsupported_feature("`sqlite` feature not enabled"))
}
