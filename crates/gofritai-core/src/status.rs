/// A row of the `status` table.
///
/// The usage figures are a fixed sample. Nothing here is measured.
pub struct StatusRow {
    pub section: &'static str,
    pub provider_id: &'static str,
    pub label: &'static str,
    pub quota: &'static str,
    pub used_pct: u8,
}

pub const STATUS_SNAPSHOT: &[StatusRow] = &[
    // Compute
    StatusRow {
        section: "COMPUTE",
        provider_id: "oracle-arm",
        label: "Oracle ARM",
        quota: "4 OCPU / 24GB",
        used_pct: 0,
    },
    StatusRow {
        section: "COMPUTE",
        provider_id: "fly-io",
        label: "Fly.io",
        quota: "3 VMs / 160GB",
        used_pct: 12,
    },
    StatusRow {
        section: "COMPUTE",
        provider_id: "render",
        label: "Render",
        quota: "750h/mo",
        used_pct: 45,
    },
    // Databases
    StatusRow {
        section: "DATABASES",
        provider_id: "supabase",
        label: "Supabase",
        quota: "500MB",
        used_pct: 23,
    },
    StatusRow {
        section: "DATABASES",
        provider_id: "turso",
        label: "Turso",
        quota: "9GB",
        used_pct: 5,
    },
    StatusRow {
        section: "DATABASES",
        provider_id: "upstash",
        label: "Upstash",
        quota: "10k cmd/day",
        used_pct: 78,
    },
];

/// Group rows by section, keeping first-seen section order.
pub fn sections() -> Vec<(&'static str, Vec<&'static StatusRow>)> {
    let mut out: Vec<(&'static str, Vec<&'static StatusRow>)> = Vec::new();
    for row in STATUS_SNAPSHOT {
        match out.iter_mut().find(|(s, _)| *s == row.section) {
            Some((_, rows)) => rows.push(row),
            None => out.push((row.section, vec![row])),
        }
    }
    out
}
