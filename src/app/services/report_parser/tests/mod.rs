//! Test helpers shared across report-parser test modules


/// Format one 15-column data row in the manufacturer layout
///
/// Only the mapped columns (airspeed, prop efficiency, thrust lbf, power W,
/// torque N-m) take meaningful values; the rest are plausible filler.
pub fn data_row(mph: f64, pe: f64, thrust_lbf: f64, power_w: f64, torque_nm: f64) -> String {
    format!(
        "   {:>5.1}   {:>6.2}   {:>6.4}   0.0890   0.0420   {:>6.3}   {:>7.3}   {:>7.3}   {:>8.1}   {:>7.3}   {:>8.2}   {:>6.2}   0.395   302110   0.720",
        mph,
        mph / 60.0,
        pe,
        power_w / 745.7,
        torque_nm * 8.8507,
        thrust_lbf,
        power_w,
        torque_nm,
        thrust_lbf * 4.44822,
        thrust_lbf * 453.592 / power_w.max(1.0),
    )
}

/// A well-formed two-block report fragment in the manufacturer layout
pub fn create_two_block_report() -> String {
    let mut report = String::new();
    report.push_str("17x8                                   \n");
    report.push_str("\n");
    report.push_str("          PROP RPM =     1000\n");
    report.push_str("\n");
    report.push_str("   V          J        Pe        Ct        Cp        PWR       Torque    Thrust     PWR      Torque    Thrust    THR/PWR   Mach     Reyn      FOM\n");
    report.push_str("  (mph)     (Adv)                                    (Hp)     (In-Lbf)   (Lbf)      (W)      (N-m)      (N)       (g/W)\n");
    report.push_str("\n");
    report.push_str(&data_row(0.0, 0.0, 0.16, 0.9, 0.009));
    report.push('\n');
    report.push_str(&data_row(2.3, 0.21, 0.14, 0.8, 0.008));
    report.push('\n');
    report.push_str("\n");
    report.push_str("          PROP RPM =     6000\n");
    report.push_str("\n");
    report.push_str("   V          J        Pe        Ct        Cp        PWR       Torque    Thrust     PWR      Torque    Thrust    THR/PWR   Mach     Reyn      FOM\n");
    report.push_str("  (mph)     (Adv)                                    (Hp)     (In-Lbf)   (Lbf)      (W)      (N-m)      (N)       (g/W)\n");
    report.push_str("\n");
    report.push_str(&data_row(0.0, 0.0, 5.9, 188.0, 0.30));
    report.push('\n');
    report.push_str(&data_row(13.6, 0.42, 5.1, 175.0, 0.28));
    report.push('\n');
    report.push_str(&data_row(27.2, 0.55, 4.0, 150.0, 0.24));
    report.push('\n');
    report
}

/// A report whose data rows appear before any RPM header
pub fn create_orphan_row_report() -> String {
    let mut report = String::new();
    report.push_str(&data_row(0.0, 0.0, 5.9, 188.0, 0.30));
    report.push('\n');
    report.push_str("          PROP RPM =     3000\n");
    report.push_str(&data_row(0.0, 0.0, 1.5, 24.0, 0.08));
    report.push('\n');
    report
}

/// Prose with numbers sprinkled in, but no header and no columnar rows
pub fn create_unparseable_report() -> String {
    "APC Propeller Performance\nGenerated 2024\nNo tabular content here.\n".to_string()
}
