//! Precomputed power-of-five and power-of-ten tables used by the fast
//! path (§4.2) and by the exact comparator (§4.4).
//!
//! Values are transcribed from the reference implementation rather than
//! recomputed, since the approximate table (`TAB28`) is pre-rounded
//! toward zero and its exact bit pattern, not just its nominal value,
//! matters for correctness.

/// `TAB1[k] == 5u64.pow(k)` for `k` in `0..28`. Exact (no rounding):
/// `5^27 < 2^64`, so every entry fits in a `u64` without truncation.
pub(crate) const TAB1: [u64; 28] = [
    1,
    5,
    25,
    125,
    625,
    3125,
    15625,
    78125,
    390625,
    1953125,
    9765625,
    48828125,
    244140625,
    1220703125,
    6103515625,
    30517578125,
    152587890625,
    762939453125,
    3814697265625,
    19073486328125,
    95367431640625,
    476837158203125,
    2384185791015625,
    11920928955078125,
    59604644775390625,
    298023223876953125,
    1490116119384765625,
    7450580596923828125,
];

/// `TAB28[k]` approximates `10**((k-13)*28)`, normalized so its top bit
/// is set (i.e. scaled by a power of two making it an "significand" in
/// `[2^63, 2^64)`), and rounded *toward zero*. The `+1` ULP adjustment
/// applied by the caller when computing the upper estimate (§4.2 step 3)
/// accounts for this directional rounding.
pub(crate) const TAB28: [u64; 25] = [
    0xe1af_a13a_fbd1_4d6d, //  10**(-364) * 2**(64+1209)
    0xe3e2_7a44_4d8d_98b7, //  10**(-336) * 2**(64+1116)
    0xe61a_cf03_3d1a_45df, //  10**(-308) * 2**(64+1023)
    0xe858_ad24_8f5c_22c9, //  10**(-280) * 2**(64+ 930)
    0xea9c_2277_23ee_8bcb, //  10**(-252) * 2**(64+ 837)
    0xece5_3cec_4a31_4ebd, //  10**(-224) * 2**(64+ 744)
    0xef34_0a98_172a_ace4, //  10**(-196) * 2**(64+ 651)
    0xf188_99b1_bc3f_8ca1, //  10**(-168) * 2**(64+ 558)
    0xf3e2_f893_dec3_f126, //  10**(-140) * 2**(64+ 465)
    0xf643_35bc_f065_d37d, //  10**(-112) * 2**(64+ 372)
    0xf8a9_5fcf_8874_7d94, //  10**( -84) * 2**(64+ 279)
    0xfb15_8592_be06_8d2e, //  10**( -56) * 2**(64+ 186)
    0xfd87_b5f2_8300_ca0d, //  10**( -28) * 2**(64+  93)
    0x8000_0000_0000_0000, //  10**(   0) * 2**(64-   1)
    0x813f_3978_f894_0984, //  10**(  28) * 2**(64-  94)
    0x8281_8f12_81ed_449f, //  10**(  56) * 2**(64- 187)
    0x83c7_088e_1aab_65db, //  10**(  84) * 2**(64- 280)
    0x850f_adc0_9923_329e, //  10**( 112) * 2**(64- 373)
    0x865b_8692_5b9b_c5c2, //  10**( 140) * 2**(64- 466)
    0x87aa_9aff_7904_2286, //  10**( 168) * 2**(64- 559)
    0x88fc_f317_f222_41e2, //  10**( 196) * 2**(64- 652)
    0x8a52_96ff_e33c_c92f, //  10**( 224) * 2**(64- 745)
    0x8bab_8eef_b640_9c1a, //  10**( 252) * 2**(64- 838)
    0x8d07_e334_5563_7eb2, //  10**( 280) * 2**(64- 931)
    0x8e67_9c2f_5e44_ff8f, //  10**( 308) * 2**(64-1024)
];

/// `5**220`, stored little-endian-limb, used by the slow path's
/// bulk-multiplication shortcut for large negative decimal exponents.
pub(crate) const TAB_POW5_220: [u64; 8] = [
    0x60c5_8d20_9ab5_5311,
    0xa1c8_3875_6612_6cba,
    0xc44e_8767_587f_4c16,
    0x9080_59e4_1a04_7cf2,
    0x7cfc_8e8a_0ba0_63ec,
    0xf014_4b2e_1fac_055e,
    0x1722_5732_4207_eb0e,
    0x7150_5aee_4b8f_981d,
];

/// `5**303`, same encoding as [`TAB_POW5_220`].
pub(crate) const TAB_POW5_303: [u64; 11] = [
    0x80a8_ab58_d818_ff0d,
    0xd82e_e807_acb4_e04a,
    0x3f2f_7c3c_7d52_768c,
    0x592b_1ec0_db4f_d779,
    0x5bbd_b420_1a04_8818,
    0xd490_df5a_e941_dd25,
    0x5487_f097_ff59_2863,
    0xd689_8606_dc17_40fd,
    0xbe64_3f00_1dea_2bc7,
    0xd305_6025_8f54_e6ba,
    0xbaa7_18e6_8396_cffd,
];

/// Decimal exponent that [`TAB_POW5_220`] represents.
pub(crate) const TAB_POW5_220_EXP: i32 = 220;
/// Decimal exponent that [`TAB_POW5_303`] represents.
pub(crate) const TAB_POW5_303_EXP: i32 = 303;
