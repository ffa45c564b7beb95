//! Built-in questionnaire cutoff norms.
//!
//! ASQ-style normative data: for each screening age interval and domain,
//! the at-risk cutoff, the monitoring-zone cutoff, and the reference
//! mean/standard deviation used for z-score percentiles.

use mosaic_types::{CutoffBand, CutoffTable, QuestionnaireDomain};

use QuestionnaireDomain::{
    Communication as Comm, FineMotor as Fine, GrossMotor as Gross, PersonalSocial as Social,
    ProblemSolving as Problem,
};

/// (age_months, domain, at_risk_cutoff, monitoring_cutoff, mean, std_dev)
const NORMS: &[(u32, QuestionnaireDomain, f64, f64, f64, f64)] = &[
    // 2 months
    (2, Comm, 20.12, 32.45, 44.78, 12.33),
    (2, Gross, 25.88, 38.62, 51.36, 12.74),
    (2, Fine, 22.45, 35.78, 49.11, 13.33),
    (2, Problem, 24.56, 37.23, 49.90, 12.67),
    (2, Social, 23.78, 36.45, 49.12, 12.67),
    // 4 months
    (4, Comm, 18.45, 31.23, 44.01, 12.78),
    (4, Gross, 22.34, 35.67, 49.00, 13.33),
    (4, Fine, 25.67, 38.12, 50.57, 12.45),
    (4, Problem, 23.89, 36.78, 49.67, 12.89),
    (4, Social, 24.12, 37.01, 49.90, 12.89),
    // 6 months
    (6, Comm, 16.78, 29.89, 43.00, 13.11),
    (6, Gross, 20.45, 33.78, 47.11, 13.33),
    (6, Fine, 26.78, 39.12, 51.46, 12.34),
    (6, Problem, 24.56, 37.23, 49.90, 12.67),
    (6, Social, 22.89, 35.78, 48.67, 12.89),
    // 8 months
    (8, Comm, 15.23, 28.12, 41.01, 12.89),
    (8, Gross, 19.78, 33.12, 46.46, 13.34),
    (8, Fine, 27.12, 39.45, 51.78, 12.33),
    (8, Problem, 24.89, 37.56, 50.23, 12.67),
    (8, Social, 22.34, 35.23, 48.12, 12.89),
    // 9 months
    (9, Comm, 15.45, 28.34, 41.23, 12.89),
    (9, Gross, 20.12, 33.56, 47.00, 13.44),
    (9, Fine, 27.45, 39.67, 51.89, 12.22),
    (9, Problem, 25.01, 37.67, 50.33, 12.66),
    (9, Social, 22.45, 35.34, 48.23, 12.89),
    // 10 months
    (10, Comm, 15.56, 28.45, 41.34, 12.89),
    (10, Gross, 20.89, 34.23, 47.57, 13.34),
    (10, Fine, 27.67, 39.78, 51.89, 12.11),
    (10, Problem, 25.12, 37.78, 50.44, 12.66),
    (10, Social, 22.56, 35.45, 48.34, 12.89),
    // 12 months
    (12, Comm, 15.64, 28.52, 41.40, 12.88),
    (12, Gross, 21.93, 35.18, 48.43, 13.25),
    (12, Fine, 27.82, 39.49, 51.16, 11.67),
    (12, Problem, 25.21, 37.74, 50.27, 12.53),
    (12, Social, 22.45, 35.67, 48.89, 13.22),
    // 14 months
    (14, Comm, 15.12, 28.01, 40.90, 12.89),
    (14, Gross, 30.45, 41.23, 52.01, 10.78),
    (14, Fine, 28.89, 40.12, 51.35, 11.23),
    (14, Problem, 25.45, 37.89, 50.33, 12.44),
    (14, Social, 24.12, 37.01, 49.90, 12.89),
    // 16 months
    (16, Comm, 14.98, 27.85, 40.72, 12.87),
    (16, Gross, 33.12, 43.56, 54.00, 10.44),
    (16, Fine, 29.78, 40.67, 51.56, 10.89),
    (16, Problem, 25.67, 38.12, 50.57, 12.45),
    (16, Social, 25.34, 38.01, 50.68, 12.67),
    // 18 months
    (18, Comm, 14.85, 27.68, 40.51, 12.83),
    (18, Gross, 35.16, 45.27, 55.38, 10.11),
    (18, Fine, 30.71, 41.25, 51.79, 10.54),
    (18, Problem, 25.84, 38.33, 50.82, 12.49),
    (18, Social, 26.45, 38.92, 51.39, 12.47),
    // 20 months
    (20, Comm, 16.45, 29.78, 43.11, 13.33),
    (20, Gross, 35.45, 45.12, 54.79, 9.67),
    (20, Fine, 30.67, 41.45, 52.23, 10.78),
    (20, Problem, 26.89, 39.23, 51.57, 12.34),
    (20, Social, 28.45, 40.12, 51.79, 11.67),
    // 22 months
    (22, Comm, 17.89, 31.23, 44.57, 13.34),
    (22, Gross, 36.12, 45.67, 55.22, 9.55),
    (22, Fine, 31.12, 41.89, 52.66, 10.77),
    (22, Problem, 27.45, 39.78, 52.11, 12.33),
    (22, Social, 29.34, 40.89, 52.44, 11.55),
    // 24 months
    (24, Comm, 19.52, 32.97, 46.42, 13.45),
    (24, Gross, 36.71, 46.03, 55.35, 9.32),
    (24, Fine, 31.52, 42.18, 52.84, 10.66),
    (24, Problem, 27.98, 40.12, 52.26, 12.14),
    (24, Social, 30.25, 41.87, 53.49, 11.62),
    // 27 months
    (27, Comm, 22.34, 35.67, 49.00, 13.33),
    (27, Gross, 36.89, 46.23, 55.57, 9.34),
    (27, Fine, 29.45, 40.78, 52.11, 11.33),
    (27, Problem, 28.67, 40.89, 53.11, 12.22),
    (27, Social, 32.12, 43.45, 54.78, 11.33),
    // 30 months
    (30, Comm, 25.67, 38.12, 50.57, 12.45),
    (30, Gross, 36.78, 46.12, 55.46, 9.34),
    (30, Fine, 28.34, 39.89, 51.44, 11.55),
    (30, Problem, 29.45, 41.67, 53.89, 12.22),
    (30, Social, 33.56, 44.23, 54.90, 10.67),
    // 33 months
    (33, Comm, 28.12, 40.34, 52.56, 12.22),
    (33, Gross, 36.78, 46.12, 55.46, 9.34),
    (33, Fine, 27.89, 39.56, 51.23, 11.67),
    (33, Problem, 30.34, 42.23, 54.12, 11.89),
    (33, Social, 34.23, 44.78, 55.33, 10.55),
    // 36 months
    (36, Comm, 30.66, 42.12, 53.58, 11.46),
    (36, Gross, 36.82, 46.27, 55.72, 9.45),
    (36, Fine, 27.56, 39.44, 51.32, 11.88),
    (36, Problem, 31.24, 42.87, 54.50, 11.63),
    (36, Social, 35.16, 45.33, 55.50, 10.17),
    // 42 months
    (42, Comm, 35.78, 46.12, 56.46, 10.34),
    (42, Gross, 36.45, 46.23, 56.01, 9.78),
    (42, Fine, 29.12, 40.89, 52.66, 11.77),
    (42, Problem, 31.12, 43.01, 54.90, 11.89),
    (42, Social, 37.45, 47.12, 56.79, 9.67),
    // 48 months
    (48, Comm, 40.71, 49.52, 58.33, 8.81),
    (48, Gross, 35.88, 46.16, 56.44, 10.28),
    (48, Fine, 30.51, 42.09, 53.67, 11.58),
    (48, Problem, 30.93, 43.13, 55.33, 12.20),
    (48, Social, 39.52, 48.27, 57.02, 8.75),
    // 54 months
    (54, Comm, 41.89, 50.45, 59.01, 8.56),
    (54, Gross, 38.12, 47.67, 57.22, 9.55),
    (54, Fine, 29.67, 41.89, 54.11, 12.22),
    (54, Problem, 33.12, 44.78, 56.44, 11.66),
    (54, Social, 40.23, 49.01, 57.79, 8.78),
    // 60 months
    (60, Comm, 42.88, 51.16, 59.44, 8.28),
    (60, Gross, 40.27, 49.13, 57.99, 8.86),
    (60, Fine, 28.72, 41.52, 54.32, 12.80),
    (60, Problem, 35.26, 46.38, 57.50, 11.12),
    (60, Social, 40.88, 49.73, 58.58, 8.85),
];

/// Build the built-in cutoff table.
pub fn builtin_cutoff_table() -> CutoffTable {
    let mut table = CutoffTable::new();
    for &(age, domain, at_risk, monitoring, mean, std_dev) in NORMS {
        table.insert(
            age,
            domain,
            CutoffBand {
                at_risk_cutoff: at_risk,
                monitoring_cutoff: monitoring,
                mean,
                std_dev,
            },
        );
    }
    table
}
