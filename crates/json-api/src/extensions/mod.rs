//! Extension traits

mod depot;
mod locator;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use locator::LocatorExt as _;
pub(crate) use result::ResultExt as _;
