//! Simulation constants and default tuning parameters.

// --- Oracle defaults ---

/// Default number of samples stored per propagation call.
pub const DEFAULT_TRAJECTORY_CAPACITY: usize = 128;

/// Default number of integrator steps between two trajectory samples.
pub const DEFAULT_INTEGRATION_STEPS: usize = 8;

/// Default rim radius around each planet (radians). Propagation stops when a
/// missile gets closer than this to any planet.
pub const DEFAULT_MIN_DIST: f64 = 0.05;

/// Default number of series terms for the spherical potential.
pub const DEFAULT_POTENTIAL_TERMS: u32 = 8;

/// Upper bound on rejection-sampling draws when placing random planets.
pub const DEFAULT_MAX_SAMPLING_DRAWS: u32 = 100_000;

// --- Game defaults ---

/// Integrated time covered by one clock tick.
pub const DEFAULT_GAME_DT: f64 = 0.1;

// --- Composition coefficients ---
//
// Symmetric compositions of the Strang splitting. Each table lists the weights
// of the stages in order.

/// Plain Strang splitting, order 2.
pub const GAMMA_P2S1: [f64; 1] = [1.0];

/// Triple jump, order 4.
pub const GAMMA_P4S3: [f64; 3] = [
    1.351_207_191_959_657_634_05,
    -1.702_414_383_919_315_268_10,
    1.351_207_191_959_657_634_05,
];

/// Suzuki's fractal, order 4.
pub const GAMMA_P4S5: [f64; 5] = [
    0.414_490_771_794_375_737_14,
    0.414_490_771_794_375_737_14,
    -0.657_963_087_177_502_948_57,
    0.414_490_771_794_375_737_14,
    0.414_490_771_794_375_737_14,
];

/// Kahan & Li (1997), order 6.
pub const GAMMA_P6S9: [f64; 9] = [
    0.392_161_444_007_314_139_28,
    0.332_599_136_789_359_438_60,
    -0.706_246_172_557_639_359_81,
    0.082_213_596_293_550_800_230,
    0.798_543_990_934_829_963_40,
    0.082_213_596_293_550_800_230,
    -0.706_246_172_557_639_359_81,
    0.332_599_136_789_359_438_60,
    0.392_161_444_007_314_139_28,
];

/// Suzuki & Umeno (1993), order 8.
pub const GAMMA_P8S15: [f64; 15] = [
    0.741_670_364_350_612_953_45,
    -0.409_100_825_800_031_594_00,
    0.190_754_710_296_238_379_95,
    -0.573_862_471_116_082_266_66,
    0.299_064_181_303_655_923_84,
    0.334_624_918_245_298_183_78,
    0.315_293_092_396_766_596_63,
    -0.796_887_939_352_916_354_02,
    0.315_293_092_396_766_596_63,
    0.334_624_918_245_298_183_78,
    0.299_064_181_303_655_923_84,
    -0.573_862_471_116_082_266_66,
    0.190_754_710_296_238_379_95,
    -0.409_100_825_800_031_594_00,
    0.741_670_364_350_612_953_45,
];
