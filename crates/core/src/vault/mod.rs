//! Vault access: file enumeration and document read/write.
//!
//! The activity logger never touches the filesystem directly. It goes through
//! the [`Vault`] trait, which is implemented by [`FsVault`] for real vault
//! directories and by [`MemoryVault`] for previews and tests.

mod fs;
mod memory;
mod record;
mod traits;
pub mod walker;

pub use fs::FsVault;
pub use memory::MemoryVault;
pub use record::{DocumentRef, FileRecord};
pub use traits::{Vault, VaultError, VaultResult};
pub use walker::{VaultWalker, VaultWalkerError, WalkedFile};
