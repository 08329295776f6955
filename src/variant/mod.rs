//! Variant tokens and their interpretation
//!
//! A variant names a platform/architecture combination published by the
//! build server (e.g. `windows-win64`). Some tokens are meta-variants that
//! stand for a group of concrete variants.

mod expand;
mod split;

pub use expand::{expand_variants, meta_variant_members};
pub use split::{OsAbi, split_variant};

/// Every token accepted on the command line, meta-variants included.
pub const VALID_PLATFORMS: &[&str] = &[
    "android",
    "android-x86_64",
    "android-x86",
    "android-armeabi-v7a",
    "android-arm64-v8a",
    "centos6",
    "dotnet",
    "java",
    "linux",
    "macos",
    "macosx",
    "ios",
    "ios/net",
    "windows",
    "windows-arm64",
    "windows-win64",
];

/// The iOS variant consumed by .NET; downloaded but never extracted.
pub const IOS_NET: &str = "ios/net";
