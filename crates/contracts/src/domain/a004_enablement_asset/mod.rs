pub mod aggregate;

pub use aggregate::{enablement_asset, EnablementAsset, EnablementAssetField, EnablementAssetItem, Highspot};
