//! # Plain-Text Report Rendering
//!
//! Turns a batch of [`SectionOutcome`]s into the calculation sheet an
//! engineer actually reads: a one-line-per-section summary table followed
//! by a detail block per section, plus a flat CSV export for spreadsheets.
//!
//! Sections whose checks errored (for example `NoSolution` on an
//! under-sized member) still get a row and a block; the error message is
//! rendered in place of the numbers so the batch report stays complete.

use std::fmt::Write as _;

use crate::checks::SectionOutcome;

fn verdict(pass: bool) -> &'static str {
    if pass {
        "O.K."
    } else {
        "N.G."
    }
}

fn opt_verdict(flag: Option<bool>) -> &'static str {
    match flag {
        Some(pass) => verdict(pass),
        None => "-",
    }
}

fn opt_num(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}

/// One-line-per-section overview.
pub fn summary_table(outcomes: &[SectionOutcome]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<28} {:>12} {:>12} {:>8} {:>8}",
        "Section", "As,req", "phi*Mn/Mu", "Shear", "Result"
    );
    let _ = writeln!(
        out,
        "{:<28} {:>12} {:>12} {:>8} {:>8}",
        "", "(mm2)", "", "", ""
    );
    let _ = writeln!(out, "{}", "-".repeat(72));

    for outcome in outcomes {
        match &outcome.result {
            Ok(result) => {
                let _ = writeln!(
                    out,
                    "{:<28} {:>12.1} {:>12} {:>8} {:>8}",
                    outcome.label,
                    result.as_req_mm2,
                    opt_num(result.capacity_ratio, 3),
                    verdict(result.shear_pass),
                    verdict(result.passes()),
                );
            }
            Err(e) => {
                let _ = writeln!(
                    out,
                    "{:<28} unable to compute - {}",
                    outcome.label,
                    e.error_code()
                );
            }
        }
    }
    out
}

/// Full detail block for one section: inputs echoed back, every computed
/// quantity, and the per-check verdict.
pub fn section_detail(outcome: &SectionOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "  {}", outcome.label);
    let _ = writeln!(out, "{}", "=".repeat(60));

    let result = match &outcome.result {
        Ok(result) => result,
        Err(e) => {
            let _ = writeln!(out, "  Unable to compute: {e}");
            return out;
        }
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "Flexure:");
    let _ = writeln!(out, "  As,req  = {:>10.1} mm2", result.as_req_mm2);
    let _ = writeln!(
        out,
        "  As,min  = {:>10.1} mm2  {}",
        result.as_min_mm2,
        opt_verdict(result.min_steel_pass)
    );
    let _ = writeln!(
        out,
        "  As,max  = {:>10.1} mm2  {}",
        result.as_max_mm2,
        opt_verdict(result.max_steel_pass)
    );
    let _ = writeln!(
        out,
        "  c       = {:>10} mm   (c_max = {:.1})  {}",
        opt_num(result.c_mm, 1),
        result.c_max_mm,
        opt_verdict(result.neutral_axis_pass)
    );
    let _ = writeln!(out, "  eps_s   = {:>10}", opt_num(result.eps_s, 5));
    let _ = writeln!(
        out,
        "  phi*Mn  = {:>10} kN-m {}",
        opt_num(result.phi_mn_knm, 1),
        opt_verdict(result.flexure_pass)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Shear:");
    if result.vcd_n.is_some() {
        let _ = writeln!(
            out,
            "  Vcd     = {:>10} kN   (Vcd,min = {})  {}",
            opt_num(result.vcd_n.map(|v| v / 1000.0), 1),
            opt_num(result.vcd_min_n.map(|v| v / 1000.0), 1),
            verdict(result.shear_pass)
        );
    }
    if result.vc_kn.is_some() {
        let _ = writeln!(
            out,
            "  Vc      = {:>10} kN   Vs = {} kN   stirrups {}",
            opt_num(result.vc_kn, 1),
            opt_num(result.vs_kn, 1),
            if result.stirrups_required == Some(true) {
                "required"
            } else {
                "not required"
            }
        );
    }
    let _ = writeln!(
        out,
        "  rho_v   = {:>10} (min {})  {}",
        opt_num(result.rho_v_use, 5),
        opt_num(result.rho_v_min, 5),
        opt_verdict(result.stirrup_ratio_pass)
    );
    let _ = writeln!(
        out,
        "  S_max   = {:>10.1} mm   {}",
        result.s_max_mm,
        opt_verdict(result.spacing_pass)
    );
    let _ = writeln!(
        out,
        "  dTr/dT  = {:>10} / {} kN  {}",
        opt_num(result.delta_tr, 1),
        opt_num(result.delta_t, 1),
        opt_verdict(result.supplemental_tension_pass)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Serviceability:");
    let _ = writeln!(
        out,
        "  ft      = {:>10} MPa  (fct = {})  {}",
        opt_num(result.ft_mpa, 3),
        opt_num(result.fct_mpa, 3),
        opt_verdict(result.edge_stress_pass)
    );
    let _ = writeln!(
        out,
        "  As,cr   = {:>10} mm2  {}",
        opt_num(result.as_cr_min_mm2, 1),
        opt_verdict(result.crack_steel_pass)
    );
    let _ = writeln!(
        out,
        "  w       = {:>10} mm   (allow {:.2})  {}",
        opt_num(result.crack_width_mm, 3),
        result.crack_width_allow_mm,
        opt_verdict(result.crack_width_pass)
    );

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  RESULT: {}",
        if result.passes() {
            "PASS".to_string()
        } else {
            format!("FAIL ({})", result.failed_checks().join(", "))
        }
    );
    out
}

/// Complete report: summary table followed by one detail block per
/// section.
pub fn render(outcomes: &[SectionOutcome]) -> String {
    let mut out = summary_table(outcomes);
    for outcome in outcomes {
        out.push('\n');
        out.push_str(&section_detail(outcome));
    }
    out
}

/// Flat comma-separated export, one row per section.
///
/// Errored sections get a row with the label, an `error` status, and the
/// error code; numeric columns are left empty.
pub fn to_csv(outcomes: &[SectionOutcome]) -> String {
    let mut out = String::from(
        "label,status,as_req_mm2,as_min_mm2,as_max_mm2,c_mm,eps_s,phi_mn_knm,\
         capacity_ratio,s_max_mm,crack_width_mm,failed_checks\n",
    );
    for outcome in outcomes {
        let label = outcome.label.replace(',', ";");
        match &outcome.result {
            Ok(r) => {
                let _ = writeln!(
                    out,
                    "{label},{},{:.2},{:.2},{:.2},{},{},{},{},{:.2},{},{}",
                    if r.passes() { "pass" } else { "fail" },
                    r.as_req_mm2,
                    r.as_min_mm2,
                    r.as_max_mm2,
                    opt_num(r.c_mm, 2),
                    opt_num(r.eps_s, 6),
                    opt_num(r.phi_mn_knm, 2),
                    opt_num(r.capacity_ratio, 4),
                    r.s_max_mm,
                    opt_num(r.crack_width_mm, 3),
                    r.failed_checks().join("; "),
                );
            }
            Err(e) => {
                let _ = writeln!(out, "{label},error,,,,,,,,,,{}", e.error_code());
            }
        }
    }
    out
}
