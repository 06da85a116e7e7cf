use super::model::InstrumentConfig;

/// Gratings are sampled at a third of their native pixel step.
const GRATING: u32 = 3;
/// Echelle orders are sampled at the native step.
const ECHELLE: u32 = 1;

/// Built-in Magellan instrument configurations: `(id, min Å, max Å, step Å, oversampling)`.
const MAGELLAN: &[(&str, f64, f64, f64, u32)] = &[
    ("MAGELLAN1_MAGE_ECHELLETTE", 3300.0, 10100.0, 0.35, GRATING),
    ("MAGELLAN2_LDSS3_VPHALL", 3650.0, 10100.0, 1.89, GRATING),
    ("MAGELLAN2_LDSS3_VPHBLUE", 3850.0, 6150.0, 0.682, GRATING),
    ("MAGELLAN2_LDSS3_VPHRED", 6000.0, 10100.0, 1.175, GRATING),
    ("MAGELLAN2_MIKE_BLUE", 3350.0, 5000.0, 0.02, ECHELLE),
    ("MAGELLAN2_MIKE_RED", 4900.0, 10000.0, 0.05, ECHELLE),
    ("MAGELLAN1_IMACS_F2_150_11", 4600.0, 9000.0, 2.630, GRATING),
    ("MAGELLAN1_IMACS_F2_200_15", 4300.0, 9400.0, 2.037, GRATING),
    ("MAGELLAN1_IMACS_F2_300_17", 4000.0, 9000.0, 1.341, GRATING),
    ("MAGELLAN1_IMACS_F2_300_26", 4700.0, 9400.0, 1.25, GRATING),
    ("MAGELLAN1_IMACS_F4_150-3_3.4", 4000.0, 9400.0, 1.453, GRATING),
    ("MAGELLAN1_IMACS_F4_300-4_6.0", 3600.0, 8000.0, 0.743, GRATING),
    ("MAGELLAN1_IMACS_F4_600-8_9.3", 3600.0, 6700.0, 0.378, GRATING),
    ("MAGELLAN1_IMACS_F4_600-13_14.0", 6700.0, 9000.0, 0.387, GRATING),
    ("MAGELLAN1_IMACS_F4_1200-17_19.0", 4200.0, 5900.0, 0.194, GRATING),
    ("MAGELLAN1_IMACS_F4_1200-27_27.0", 6300.0, 7800.0, 0.096, GRATING),
    ("MAGELLAN1_IMACS_F4_1200-27_33.5", 7900.0, 9300.0, 0.188, GRATING),
];

/// The instrument table used when no external table is given.
pub fn builtin_instruments() -> Vec<InstrumentConfig> {
    MAGELLAN
        .iter()
        .map(|&(id, min, max, step, k)| InstrumentConfig::new(id, min, max, step, k))
        .collect()
}
