use std::collections::BTreeSet;

const DOTNET: &[&str] = &[
    "linux",
    "android-x86_64",
    "android-x86",
    "android-armeabi-v7a",
    "android-arm64-v8a",
    "macosx",
    "ios/net",
    "windows-win64",
    "windows-arm64",
];

const ANDROID: &[&str] = &[
    "android-x86_64",
    "android-x86",
    "android-armeabi-v7a",
    "android-arm64-v8a",
];

const JAVA: &[&str] = &["linux", "macosx", "windows-win64"];

const WINDOWS: &[&str] = &["windows-win64", "windows-arm64"];

const MACOS: &[&str] = &["macosx"];

/// Returns the concrete variants a meta-variant stands for, or `None` if
/// `token` is not a meta-variant.
pub fn meta_variant_members(token: &str) -> Option<&'static [&'static str]> {
    match token {
        "dotnet" => Some(DOTNET),
        "android" => Some(ANDROID),
        "java" => Some(JAVA),
        "windows" => Some(WINDOWS),
        "macos" => Some(MACOS),
        _ => None,
    }
}

/// Expands meta-variants into their members and unions everything.
///
/// Tokens that are not meta-variants pass through unchanged, including
/// ones that are not valid platforms at all.
pub fn expand_variants<I, S>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut variants = BTreeSet::new();
    for token in tokens {
        let token = token.as_ref();
        match meta_variant_members(token) {
            Some(members) => variants.extend(members.iter().map(|m| m.to_string())),
            None => {
                variants.insert(token.to_string());
            }
        }
    }
    variants
}
