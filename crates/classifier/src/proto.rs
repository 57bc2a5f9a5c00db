//! Proto — canonical protocol names for numeric IP protocol ids.

/// Resolve a numeric protocol id to its canonical lowercase name.
///
/// Total over all of `i64`: ids outside the known table get a synthetic
/// `proto_<id>` name, which cannot collide with a known name and is unique
/// per id.
pub fn protocol_name(id: i64) -> String {
    match id {
        6 => "tcp".to_string(),
        17 => "udp".to_string(),
        1 => "icmp".to_string(),
        2 => "igmp".to_string(),
        other => format!("proto_{}", other),
    }
}
