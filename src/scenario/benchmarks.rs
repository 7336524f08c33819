//! Literal benchmark waypoint tables.
//!
//! Nine delivery data sets over the same field, grouped by payload class
//! (light/mid/heavy) with three draws each. Row layout:
//! `[lat_deg, lon_deg, altitude_m, speed_mps, deadline_s, payload_kg]`.
//! Each table carries 15 rows; a scenario run consumes the leading
//! [`crate::mission::MAX_DELIVERY_ITEMS`] rows.

/// One named benchmark table.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub name: &'static str,
    pub rows: &'static [[f32; 6]],
}

/// The nine benchmark tables in execution order.
pub fn benchmark_suite() -> [Benchmark; 9] {
    [
        Benchmark {
            name: "light_uniform_a1",
            rows: &LIGHT_UNIFORM_A1,
        },
        Benchmark {
            name: "light_uniform_a2",
            rows: &LIGHT_UNIFORM_A2,
        },
        Benchmark {
            name: "light_uniform_a3",
            rows: &LIGHT_UNIFORM_A3,
        },
        Benchmark {
            name: "mid_uniform_a1",
            rows: &MID_UNIFORM_A1,
        },
        Benchmark {
            name: "mid_uniform_a2",
            rows: &MID_UNIFORM_A2,
        },
        Benchmark {
            name: "mid_uniform_a3",
            rows: &MID_UNIFORM_A3,
        },
        Benchmark {
            name: "heavy_uniform_a1",
            rows: &HEAVY_UNIFORM_A1,
        },
        Benchmark {
            name: "heavy_uniform_a2",
            rows: &HEAVY_UNIFORM_A2,
        },
        Benchmark {
            name: "heavy_uniform_a3",
            rows: &HEAVY_UNIFORM_A3,
        },
    ]
}

pub static LIGHT_UNIFORM_A1: [[f32; 6]; 15] = [
    [47.400531, 8.545726, 20.0, 5.0, 278.3, 0.1746],
    [47.398529, 8.548123, 20.0, 5.0, 518.1, 0.135],
    [47.401395, 8.548786, 20.0, 5.0, 425.7, 0.1389],
    [47.400935, 8.548626, 20.0, 5.0, 473.9, 0.158],
    [47.399671, 8.54898, 20.0, 5.0, 280.2, 0.1598],
    [47.399744, 8.547043, 20.0, 5.0, 460.9, 0.1373],
    [47.397979, 8.546674, 20.0, 5.0, 457.3, 0.1337],
    [47.399042, 8.545607, 20.0, 5.0, 393.2, 0.1216],
    [47.400494, 8.546446, 20.0, 5.0, 283.8, 0.1806],
    [47.400284, 8.548646, 20.0, 5.0, 510.6, 0.1157],
    [47.400666, 8.547076, 20.0, 5.0, 480.2, 0.1856],
    [47.401413, 8.548361, 20.0, 5.0, 408.8, 0.1197],
    [47.401867, 8.548212, 20.0, 5.0, 508.4, 0.1605],
    [47.400242, 8.549139, 20.0, 5.0, 335.8, 0.1135],
    [47.401417, 8.549601, 20.0, 5.0, 379.5, 0.1064],
];

pub static LIGHT_UNIFORM_A2: [[f32; 6]; 15] = [
    [47.400311, 8.547877, 20.0, 5.0, 447.3, 0.1479],
    [47.400145, 8.548857, 20.0, 5.0, 447.7, 0.1347],
    [47.39814, 8.549261, 20.0, 5.0, 423.6, 0.1516],
    [47.401077, 8.549405, 20.0, 5.0, 309.4, 0.176],
    [47.40046, 8.547032, 20.0, 5.0, 393.0, 0.1365],
    [47.400108, 8.549792, 20.0, 5.0, 353.8, 0.1407],
    [47.401154, 8.549313, 20.0, 5.0, 482.8, 0.1121],
    [47.398187, 8.548391, 20.0, 5.0, 403.5, 0.1183],
    [47.400587, 8.54828, 20.0, 5.0, 506.6, 0.1898],
    [47.399886, 8.547931, 20.0, 5.0, 430.4, 0.1726],
    [47.399915, 8.547646, 20.0, 5.0, 324.2, 0.1665],
    [47.398016, 8.549082, 20.0, 5.0, 348.2, 0.1029],
    [47.39863, 8.546945, 20.0, 5.0, 381.2, 0.1579],
    [47.401482, 8.546467, 20.0, 5.0, 509.7, 0.1071],
    [47.401199, 8.545607, 20.0, 5.0, 286.0, 0.1732],
];

pub static LIGHT_UNIFORM_A3: [[f32; 6]; 15] = [
    [47.398692, 8.545934, 20.0, 5.0, 477.0, 0.1562],
    [47.398189, 8.546263, 20.0, 5.0, 330.9, 0.1784],
    [47.401752, 8.548625, 20.0, 5.0, 449.7, 0.1068],
    [47.400179, 8.54987, 20.0, 5.0, 375.5, 0.1775],
    [47.398777, 8.548875, 20.0, 5.0, 434.3, 0.1997],
    [47.400265, 8.548621, 20.0, 5.0, 383.9, 0.1247],
    [47.400455, 8.547714, 20.0, 5.0, 270.0, 0.1349],
    [47.399752, 8.547179, 20.0, 5.0, 270.0, 0.1589],
    [47.398137, 8.547708, 20.0, 5.0, 362.1, 0.1257],
    [47.39938, 8.548166, 20.0, 5.0, 308.1, 0.1415],
    [47.40132, 8.547872, 20.0, 5.0, 453.0, 0.1343],
    [47.401867, 8.546956, 20.0, 5.0, 306.5, 0.1991],
    [47.401587, 8.547204, 20.0, 5.0, 336.2, 0.1048],
    [47.399461, 8.545967, 20.0, 5.0, 470.8, 0.1523],
    [47.40027, 8.545779, 20.0, 5.0, 510.6, 0.1359],
];

pub static MID_UNIFORM_A1: [[f32; 6]; 15] = [
    [47.401908, 8.548893, 20.0, 5.0, 292.8, 0.2842],
    [47.398082, 8.54851, 20.0, 5.0, 417.8, 0.2966],
    [47.401836, 8.548872, 20.0, 5.0, 342.8, 0.269],
    [47.398373, 8.549745, 20.0, 5.0, 387.6, 0.2023],
    [47.398656, 8.547431, 20.0, 5.0, 449.7, 0.3972],
    [47.398024, 8.547757, 20.0, 5.0, 505.5, 0.3832],
    [47.401783, 8.548393, 20.0, 5.0, 499.1, 0.152],
    [47.402027, 8.549529, 20.0, 5.0, 411.0, 0.2258],
    [47.39898, 8.548501, 20.0, 5.0, 440.7, 0.2737],
    [47.39963, 8.547295, 20.0, 5.0, 281.1, 0.1779],
    [47.398712, 8.549651, 20.0, 5.0, 509.7, 0.3553],
    [47.398348, 8.547932, 20.0, 5.0, 420.7, 0.2433],
    [47.401499, 8.546505, 20.0, 5.0, 309.4, 0.2535],
    [47.402039, 8.546774, 20.0, 5.0, 341.0, 0.3555],
    [47.400009, 8.547382, 20.0, 5.0, 442.3, 0.3485],
];

pub static MID_UNIFORM_A2: [[f32; 6]; 15] = [
    [47.400611, 8.549583, 20.0, 5.0, 336.8, 0.1798],
    [47.398877, 8.547868, 20.0, 5.0, 529.5, 0.2761],
    [47.399676, 8.548825, 20.0, 5.0, 349.9, 0.3617],
    [47.401896, 8.546196, 20.0, 5.0, 487.6, 0.217],
    [47.400587, 8.548069, 20.0, 5.0, 363.0, 0.2165],
    [47.398708, 8.54785, 20.0, 5.0, 378.0, 0.1962],
    [47.397784, 8.547396, 20.0, 5.0, 385.6, 0.2647],
    [47.399063, 8.545612, 20.0, 5.0, 369.6, 0.3685],
    [47.401254, 8.54609, 20.0, 5.0, 470.2, 0.3907],
    [47.400248, 8.547023, 20.0, 5.0, 386.6, 0.1064],
    [47.401942, 8.549102, 20.0, 5.0, 394.3, 0.2516],
    [47.401869, 8.549053, 20.0, 5.0, 472.6, 0.3528],
    [47.399352, 8.549653, 20.0, 5.0, 417.2, 0.3413],
    [47.399591, 8.546109, 20.0, 5.0, 433.3, 0.2043],
    [47.398588, 8.547416, 20.0, 5.0, 345.4, 0.1167],
];

pub static MID_UNIFORM_A3: [[f32; 6]; 15] = [
    [47.399265, 8.547727, 20.0, 5.0, 370.9, 0.3703],
    [47.398988, 8.547734, 20.0, 5.0, 291.4, 0.1452],
    [47.399852, 8.549769, 20.0, 5.0, 341.4, 0.3396],
    [47.400257, 8.549799, 20.0, 5.0, 374.4, 0.2288],
    [47.401067, 8.548227, 20.0, 5.0, 376.2, 0.2999],
    [47.401609, 8.549754, 20.0, 5.0, 332.4, 0.3379],
    [47.39916, 8.547769, 20.0, 5.0, 368.8, 0.3237],
    [47.399994, 8.547208, 20.0, 5.0, 461.7, 0.2865],
    [47.399339, 8.546526, 20.0, 5.0, 321.5, 0.3357],
    [47.39866, 8.547615, 20.0, 5.0, 278.4, 0.1225],
    [47.398118, 8.549748, 20.0, 5.0, 375.7, 0.3995],
    [47.401012, 8.547312, 20.0, 5.0, 524.9, 0.2249],
    [47.401445, 8.545864, 20.0, 5.0, 400.7, 0.2278],
    [47.401688, 8.548747, 20.0, 5.0, 337.5, 0.2089],
    [47.399911, 8.547065, 20.0, 5.0, 366.4, 0.3621],
];

pub static HEAVY_UNIFORM_A1: [[f32; 6]; 15] = [
    [47.398273, 8.546864, 20.0, 5.0, 448.5, 0.3708],
    [47.397837, 8.548501, 20.0, 5.0, 327.7, 0.2422],
    [47.401718, 8.549628, 20.0, 5.0, 383.9, 0.1969],
    [47.401017, 8.547346, 20.0, 5.0, 447.3, 0.7385],
    [47.40054, 8.548873, 20.0, 5.0, 505.6, 0.1517],
    [47.399358, 8.548942, 20.0, 5.0, 498.9, 0.3547],
    [47.401884, 8.548335, 20.0, 5.0, 367.5, 0.3931],
    [47.399582, 8.547915, 20.0, 5.0, 461.5, 0.6422],
    [47.399659, 8.549806, 20.0, 5.0, 337.9, 0.6084],
    [47.398231, 8.546547, 20.0, 5.0, 362.6, 0.1105],
    [47.401436, 8.546741, 20.0, 5.0, 360.6, 0.586],
    [47.398383, 8.548167, 20.0, 5.0, 478.5, 0.7768],
    [47.398619, 8.546152, 20.0, 5.0, 378.0, 0.1102],
    [47.398864, 8.547519, 20.0, 5.0, 375.6, 0.4526],
    [47.400386, 8.547886, 20.0, 5.0, 425.6, 0.2243],
];

pub static HEAVY_UNIFORM_A2: [[f32; 6]; 15] = [
    [47.399915, 8.547102, 20.0, 5.0, 395.8, 0.3166],
    [47.398249, 8.548196, 20.0, 5.0, 313.9, 0.1153],
    [47.398167, 8.547819, 20.0, 5.0, 461.2, 0.3928],
    [47.3981, 8.547587, 20.0, 5.0, 519.9, 0.5972],
    [47.398099, 8.547685, 20.0, 5.0, 377.1, 0.6217],
    [47.40007, 8.549234, 20.0, 5.0, 423.2, 0.1373],
    [47.401643, 8.546713, 20.0, 5.0, 387.7, 0.5547],
    [47.401339, 8.549508, 20.0, 5.0, 314.4, 0.1827],
    [47.401136, 8.545703, 20.0, 5.0, 306.1, 0.3658],
    [47.399924, 8.547904, 20.0, 5.0, 356.3, 0.5222],
    [47.40045, 8.548772, 20.0, 5.0, 353.4, 0.435],
    [47.397842, 8.549019, 20.0, 5.0, 402.8, 0.5795],
    [47.401997, 8.549075, 20.0, 5.0, 345.1, 0.4968],
    [47.400253, 8.545827, 20.0, 5.0, 437.3, 0.2191],
    [47.399182, 8.54653, 20.0, 5.0, 478.5, 0.2239],
];

pub static HEAVY_UNIFORM_A3: [[f32; 6]; 15] = [
    [47.401923, 8.549843, 20.0, 5.0, 438.6, 0.1298],
    [47.400701, 8.546357, 20.0, 5.0, 297.8, 0.727],
    [47.399683, 8.547873, 20.0, 5.0, 287.1, 0.5901],
    [47.398463, 8.547258, 20.0, 5.0, 481.0, 0.4473],
    [47.398035, 8.547075, 20.0, 5.0, 415.8, 0.4409],
    [47.399799, 8.549891, 20.0, 5.0, 329.0, 0.4863],
    [47.401843, 8.546182, 20.0, 5.0, 406.8, 0.4186],
    [47.400357, 8.547087, 20.0, 5.0, 397.0, 0.2378],
    [47.399889, 8.547714, 20.0, 5.0, 506.1, 0.3437],
    [47.398657, 8.54565, 20.0, 5.0, 479.2, 0.1838],
    [47.401623, 8.546507, 20.0, 5.0, 304.9, 0.7417],
    [47.3997, 8.546655, 20.0, 5.0, 488.3, 0.5126],
    [47.400687, 8.549807, 20.0, 5.0, 472.8, 0.7459],
    [47.399035, 8.546572, 20.0, 5.0, 526.0, 0.4478],
    [47.398715, 8.546153, 20.0, 5.0, 344.7, 0.3141],
];
