//! Configuration section definitions.
//!
//! | Module       | TOML Section     | Purpose                              |
//! |--------------|------------------|--------------------------------------|
//! | `info`       | `[site]`         | Site metadata                        |
//! | `menu`       | `[[query]]`      | Static queries, menu placements      |
//! | `collection` | `[[collection]]` | Collections and their items          |

mod collection;
mod info;
mod menu;

pub use collection::{CollectionConfig, ReferenceDecl};
pub use info::SiteInfoConfig;
pub use menu::{MenuPlacement, StaticQueryConfig};
