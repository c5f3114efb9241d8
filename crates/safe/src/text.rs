use std::collections::BTreeMap;

/// Replaces every occurrence of each key of `replacements` in `subject`
/// with its value.
///
/// Keys are applied one after another in map order, each over the output
/// of the previous one. Empty keys and keys mapped to themselves are
/// skipped.
pub fn strtr<K, V>(subject: &str, replacements: &BTreeMap<K, V>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if subject.is_empty() || replacements.is_empty() {
        return subject.to_owned();
    }

    let mut out = subject.to_owned();
    for (old, new) in replacements {
        let (old, new) = (old.as_ref(), new.as_ref());
        if old.is_empty() || old == new {
            continue;
        }
        out = out.replace(old, new);
    }
    out
}
