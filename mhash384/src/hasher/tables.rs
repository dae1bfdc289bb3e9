//! The published constant tables that define MHash-384.
//!
//! The reference implementation ships these tables as packed, base64-encoded
//! blobs that are decoded on startup. Here they are stored as native `const`
//! arrays instead, which makes a malformed-table state unrepresentable at
//! runtime. The values must be preserved bit for bit: changing a single
//! entry yields an internally consistent but incompatible hash function.
//! Structural sanity checks live in the tests at the bottom of this file;
//! the values themselves are pinned by the vectors in [`crate::self_test`].

use super::STATE_SIZE;
use super::digest::Digest;

/// Number of rows in the byte-indexed tables: one row per input byte value,
/// plus the reserved row [`FINALIZATION_ROW`].
pub const TABLE_ROWS: usize = 257;

/// Index of the reserved row in [`XOR_CONSTANTS`] and [`ADD_CONSTANTS`] that
/// seeds the first finalization round. Not reachable from any input byte.
pub const FINALIZATION_ROW: usize = 256;

/// The state every hash computation starts from.
#[rustfmt::skip]
pub const INITIAL_STATE: [u64; STATE_SIZE] = [
    0x243f_6a88_85a3_08d3, 0x1319_8a2e_0370_7344, 0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89, 0x4528_21e6_38d0_1377, 0xbe54_66cf_34e9_0c6c,
];

/// Per-byte whitening constants, XOR-ed into each state word at the end of a
/// round. Rows 0–255 are selected by the input byte; row 256 is reserved for
/// finalization.
#[rustfmt::skip]
pub const XOR_CONSTANTS: [[u64; STATE_SIZE]; TABLE_ROWS] = [
    [0x01dc_df00_414b_3037, 0xb1b3_af66_1b8e_96f8, 0x944d_2873_db39_3121,
     0x73da_9a36_662a_e755, 0x1f4f_318c_4ecb_56b1, 0xf097_43d9_9c2a_a5bc],
    [0xa81f_bbc6_cbbf_c954, 0x39de_4364_8959_eddb, 0x1a64_1a0b_da01_822f,
     0xb52e_6072_6693_2658, 0x2c5b_1731_ac80_2084, 0xc2ef_1067_1fc7_9dd4],
    [0xcf2a_8d8e_0881_0046, 0x8b7e_9b20_89e2_68f6, 0x9304_6165_2c5d_2dec,
     0xf096_e422_23bf_c8b9, 0x8dd3_3896_4cfe_0970, 0x269c_342f_7cec_60bd],
    [0xb970_a920_d2ed_0552, 0x010f_894a_254d_a7e1, 0x8d5f_205f_9d1a_40d8,
     0x50c3_3dcc_c3fd_5f58, 0xb49f_31bd_e7d8_2c57, 0x7cde_04f6_2a95_9033],
    [0x49fa_b282_2b9c_84ac, 0x34b8_648c_d68c_bef1, 0xe512_1147_bb41_26de,
     0xc0b3_1f54_b2ff_e00f, 0x2f19_3da3_8e8c_c632, 0x058c_984b_429b_8afc],
    [0xe07f_9da4_4d8c_9942, 0xbe2a_f9b3_9aca_65f2, 0x5d3d_8fb1_466d_c295,
     0xc005_1e3e_c3f9_62c7, 0xf8fd_c3cc_d4ce_2bb6, 0x9024_c0ef_c619_9937],
    [0xa311_1377_ef01_f5ef, 0x31f5_9b36_6c02_a3ff, 0x61b8_2949_760d_16dc,
     0xf6b9_58af_92bd_3bdf, 0x7297_aaef_ec69_c0b2, 0xfe8a_50ad_9e86_84cd],
    [0x3d3d_d0c8_29ea_9aa0, 0x3e77_597e_ec96_c7a3, 0x8fd0_3823_1e7f_1684,
     0x6461_7b13_1fb7_ede0, 0x85c9_9ce4_c540_5874, 0xa587_35d4_1f19_c5e3],
    [0x8028_628a_caf9_1b9a, 0x194a_6405_38c9_7064, 0x04a1_5e01_8a4f_1680,
     0xf4be_1b04_c236_0955, 0xdfb2_4d4c_ef58_1a20, 0x3c59_d0a0_fd15_879d],
    [0x88f8_e2ec_e78a_f1bc, 0xb46b_6e22_2973_64c2, 0x9339_f17f_926b_99f3,
     0x3129_3489_b3b8_f07c, 0x3909_ce16_49c9_bcf1, 0x0c46_103b_fa31_bce9],
    [0x4d1a_0b8c_c7ef_e2a9, 0xafd7_878c_ad55_e871, 0xc89c_fbc8_58cf_4153,
     0xc473_9486_c74f_75d6, 0x0bf7_192c_130a_c9f2, 0x0084_f2bc_5e81_bd9a],
    [0x4afb_e975_014f_cacf, 0x41de_af8c_facc_41e4, 0x3c1e_c23b_53ed_16e9,
     0x78b0_6eb3_0f1c_3248, 0xdd11_165d_0428_5c72, 0x6546_d9b5_6094_91e4],
    [0xffd1_e2e0_4dc8_d260, 0x07b1_8694_8a74_ecce, 0xb512_0e45_121a_c531,
     0xbd0b_c863_3081_0c85, 0xde93_afdd_db48_7730, 0x78de_b0de_6eb9_9196],
    [0x79ba_a2ac_3fde_ba55, 0xb1b7_e3e1_c92a_567e, 0xa53f_69ab_4a5b_0794,
     0xf0da_7499_954f_6ddd, 0x5811_7c89_e113_2248, 0xd95d_f5f7_94c5_1a6e],
    [0x89bc_8a0c_6509_1c33, 0xb04e_eaee_0631_35c2, 0xf532_67e0_4ab6_e689,
     0xb4c5_79b7_207e_8bf2, 0x3fd3_1e51_343c_d2df, 0x119e_523e_2f81_97fe],
    [0x2e10_cb1c_6060_f32d, 0xbc92_e732_a94e_6b63, 0xf322_0d83_1fd0_4267,
     0x502c_5f74_14bc_e87f, 0x89e0_651d_e91d_2457, 0x759e_56b0_4482_d915],
    [0x43ae_e32c_6a84_e803, 0x0c50_0720_2c0b_d7e3, 0xb4f4_6447_4205_d32a,
     0x7d17_fc95_de38_6c06, 0xe8df_bf64_567a_a545, 0x55bd_889d_5853_046f],
    [0x687a_be14_eab8_da27, 0x397b_3ab5_0d72_c344, 0x505e_aa6d_1fde_618d,
     0x61be_7986_5da1_3f69, 0x17bb_ab29_b5e9_0e2d, 0x010c_9219_72fa_8b2f],
    [0x8b72_23a4_f56f_f453, 0x291b_7b5c_b98b_6fe1, 0xfd42_1625_786f_bf7d,
     0xe33d_1020_d0e8_cdc8, 0xca53_0c70_8b73_9e87, 0x878a_f1f3_04b8_a12f],
    [0x7ece_1f24_e56d_d711, 0x2e08_6924_1b2f_a6df, 0x84b8_34dc_c459_b2fd,
     0xe022_eda6_319e_7d3b, 0x5983_9d8c_a03c_9928, 0x6447_90f4_91bb_c774],
    [0xcbdc_6f49_e6b0_dd0d, 0x44ba_2f8d_0034_6732, 0x86bc_c821_586a_e61c,
     0xc7b7_4912_85ce_e55b, 0xed39_12ff_d97f_3851, 0xf4af_0186_bebe_bcbf],
    [0xca8a_48e5_4ecc_e516, 0xbedf_1864_b7f8_f506, 0xd56a_1f60_a4b3_6aa4,
     0x49b2_5ab5_fe0d_d9d9, 0x2137_7dbb_5e49_fce1, 0x708f_64f5_d59d_99e7],
    [0xe9f8_73a5_69af_e02c, 0xda66_bc05_ca99_7390, 0x8c88_1747_56d3_5385,
     0xeaaa_f16c_f4fd_a730, 0xb39f_7a55_653a_3512, 0xf10a_b727_bc23_e852],
    [0x93e9_6ff8_c5bb_e2af, 0xa477_8542_0253_e97c, 0x704b_25d1_f77d_074c,
     0xc0b2_093f_1470_559c, 0x8d5b_fdd4_e364_aacf, 0x5505_1867_3f5b_1bf7],
    [0x8dac_832e_5be8_1acb, 0x588b_fb20_2b75_83d8, 0xa34d_8a70_dfd1_d7e4,
     0xd03b_0627_b687_033e, 0xe3d0_be7e_dbdc_75cf, 0x818e_e8c5_b09f_8bea],
    [0x8e3b_02e1_489d_7d31, 0x5336_752b_64e3_b532, 0xe4d4_cc79_5c58_0a65,
     0x6dab_08f3_13ed_767e, 0x8e56_7e88_fdba_36bf, 0x2594_90f1_d8e9_33d0],
    [0xeab4_37d0_d62c_aa62, 0xc090_ad28_b982_b003, 0xe255_d768_d257_04ec,
     0xa048_511a_f625_6a43, 0xe79f_078f_4d49_8b5f, 0xc417_35fb_75b3_57fe],
    [0x70da_9fc3_504f_f29d, 0xb9ab_1f38_8673_ff25, 0x3692_2f4c_d173_57ba,
     0xf09c_3ab2_92e7_e04a, 0x90ce_0bc3_d9ba_13ec, 0x647c_4ca6_3c91_8de3],
    [0xd834_a38d_d1ec_d688, 0xa97a_0020_de46_ab6a, 0x9cde_c7f6_e62e_a71f,
     0x288a_5a6f_d74d_c47e, 0xd44a_2e27_65ce_50f1, 0xbb9b_50b5_db9e_4f3c],
    [0xc66d_a90e_41dd_f2e6, 0x5a3f_e86f_160c_5c09, 0x6f6a_f040_5108_ccbe,
     0xf938_382e_b627_fc7f, 0x163d_d634_617f_006c, 0x5184_b1fe_dc90_8497],
    [0xc957_19ed_07fc_b21c, 0x5112_df04_3f6e_e7eb, 0x50f9_fd60_0123_34ce,
     0x589f_a851_04d9_6579, 0xb712_9e44_d719_05a7, 0x3314_766e_0733_528d],
    [0xdc6c_8014_c545_7cb8, 0xd635_fdcd_286a_69b6, 0xd66f_232c_e27d_01bf,
     0x56af_4ac0_f682_ec0f, 0x57df_1d55_b643_28f5, 0x651e_d4c5_2a87_caca],
    [0x26d9_d1cc_79ee_c502, 0x69bf_340a_34b1_ebfe, 0xfaa5_aaac_8e39_7174,
     0xd0a8_f9bd_426b_cf6f, 0x5b13_1f46_4d6d_2452, 0x122d_d156_60d0_d6da],
    [0x6e38_9aec_5f51_a22f, 0x7ef6_8f1c_54c1_27fb, 0x986d_4d46_e048_5c30,
     0xf0a4_7b39_e7cf_8a31, 0x1d39_8dfd_b7f2_a78f, 0x2fc6_51d1_fbb1_0d2e],
    [0xa44e_4e8d_1b49_dcb0, 0x07a4_8220_49c2_f343, 0xc40a_c04a_8d65_05ba,
     0xd9b9_1d3f_0729_b16c, 0xaaf3_9951_b50f_9015, 0x966e_f5d3_ad3f_9076],
    [0xea78_cbac_0eb6_d009, 0xa0fe_a672_5a23_deab, 0xce72_9c74_44cb_94d9,
     0x40a9_9462_6627_aa0d, 0x37f7_38cd_e3d0_18d5, 0x4c29_491c_01cd_b3c5],
    [0x7c97_92ae_a745_c87a, 0xd1ff_5620_c5bd_8fd4, 0x9eca_84e3_004b_56b9,
     0x5afd_3923_c228_b1d6, 0xe5db_f79e_b3fd_283b, 0x4417_12e3_5408_4b9f],
    [0xe35d_288b_d8e2_49bc, 0x9177_6c14_53a3_66e5, 0xf5d1_e168_4e95_efec,
     0x9108_e117_d7dd_f606, 0x81b3_0f9d_a2ce_7c8c, 0x6497_dbd7_8681_8c0d],
    [0xc2f8_91ff_4504_4be0, 0x75a1_a76d_2b87_e2eb, 0x85ce_6579_8af3_c2bf,
     0x213f_532b_4efd_09dc, 0x0daa_1df5_a53a_6c88, 0x3028_606a_50d8_26b2],
    [0x609a_6261_6379_f33a, 0xa339_a3bc_53e4_516d, 0xd7ad_9261_6a5a_dbec,
     0xd043_726d_86e9_24aa, 0x8555_b564_f4c2_9865, 0x56aa_12ab_31c1_d6b0],
    [0xced9_ed85_c1c1_7bff, 0xeb52_2325_acba_ffc2, 0x04d3_d8f4_b2d1_5394,
     0xd271_504c_0475_6eea, 0x2ddb_a4a9_1af8_27f1, 0x1f67_d5c2_8f80_02e4],
    [0x8b9c_08ad_432d_c08f, 0x5a75_43e2_9796_bbc7, 0x34a6_db5b_3c19_67de,
     0x016e_3bc2_a280_4ee4, 0x5b9b_cacc_e517_2f75, 0x7549_598b_80ad_bdba],
    [0x6f3f_b117_c5cd_d155, 0x16c3_b0a5_9cd6_eec5, 0xd9a1_a411_de53_8769,
     0x938c_5497_9f4a_c37c, 0x3737_bcc1_d552_84db, 0x6cad_9f8a_f915_6bb7],
    [0xebbf_284f_9c75_ebdf, 0xb383_ebb4_0675_3de8, 0xaa86_127a_ee7c_403c,
     0x10bf_dd10_523d_e027, 0x138b_f6c4_eb4a_8a13, 0xb1ef_f67d_db78_b067],
    [0xf6d1_138d_7aa3_da5e, 0xbaa8_098d_8fb6_6371, 0xdae7_6d1b_8b6c_aaf2,
     0x400f_1034_368d_1edc, 0x7c93_7f51_72e8_d277, 0x7d05_bbf8_3cad_e6ef],
    [0x0e9c_2ea6_cf34_b081, 0x9036_b30d_58f6_0ba0, 0xdb3a_2c58_48f0_8bca,
     0xc87a_d1b9_4250_d564, 0x7c89_2e09_eef9_6166, 0x26db_85cf_5710_85f3],
    [0x251e_e3f5_8718_c12a, 0xf943_8d81_178a_2ae4, 0xf092_9a88_9039_a8a8,
     0xf06b_6522_5ebd_ccfd, 0x2e4d_14ed_f7bf_73c6, 0xa936_9895_bc1d_facf],
    [0xcae3_02b4_1d69_79cb, 0xbbfa_5a58_b51e_e623, 0x5113_b99d_c81a_b52f,
     0x6093_795b_ec17_a056, 0x8f71_fb4d_2e5e_355e, 0x762f_92ed_ba34_a2f2],
    [0xd130_0152_65a4_d9ff, 0x09be_a253_d71f_26c8, 0x81b6_eaed_c465_21e6,
     0xfae2_6816_5682_b8a9, 0xa89c_3ec4_774a_b623, 0x0d2e_45e0_5521_9db2],
    [0x2b56_0284_c3a6_92ab, 0x3700_8ad0_b379_a7b8, 0xaf11_cd2c_30f9_0bfc,
     0x7fe8_7a25_0f27_62ed, 0xc3fb_d711_6472_42c3, 0x74ed_8264_f6b3_22bd],
    [0x2819_5cc8_a7ad_3943, 0x53cb_e808_464c_4fc4, 0xd58e_3d7a_765f_8726,
     0xd830_52f6_0185_aa4f, 0xefcb_0d85_223b_b4e7, 0x5a31_305e_787f_ac28],
    [0x725d_0ee2_30f1_9543, 0x9091_d2c6_bddf_34e0, 0xe3be_49c6_c275_4601,
     0x61be_300b_a4ad_566b, 0x02d7_9d75_51fa_7cc1, 0x6543_910f_5f1c_da58],
    [0x4099_adc4_4481_b43f, 0xfe13_6192_2fd9_eb81, 0xa989_c09e_441f_ceac,
     0x449b_3a13_d3cb_9019, 0x45a9_be39_6f20_1134, 0xdc1a_d05a_0466_33fe],
    [0x1a56_3a6d_522f_3e69, 0xbe58_9e07_9f47_5a9e, 0x75a2_a963_8e4c_0038,
     0xda3b_6202_577a_0362, 0x211d_3f1e_0d72_7af6, 0x5e1f_fc52_9ad9_9233],
    [0x47b6_1e86_c6d6_d01b, 0x437d_6f83_adad_c318, 0xd5a3_6102_8ded_738c,
     0xa00d_4c63_0425_164b, 0x1a69_afa5_af4c_9dd2, 0xf99e_1c67_f951_b582],
    [0xa66a_7740_b6bd_ea79, 0xfef7_ff14_96af_80a3, 0x05af_d43e_eacd_898c,
     0xb00c_78ed_31ad_7134, 0x0ed3_1a1a_d784_6673, 0x74b9_6844_1614_99be],
    [0x46fa_8d6c_cbf6_d12e, 0x31c2_fc14_7f30_3956, 0x707f_4401_de5f_067f,
     0x3ae5_fec7_e335_94e9, 0x28e3_9f8a_6353_1714, 0xb7b3_29ea_1e9f_cab2],
    [0xefd8_f755_825c_7804, 0x1f5a_9387_0bd3_0cd1, 0xefbf_8946_71ff_8716,
     0x28ed_617f_f22b_da58, 0x4112_89cc_ae5c_b62e, 0x95dd_42f4_1801_f2f9],
    [0xa852_5b86_45fc_59e1, 0x75e6_2dc0_0a5f_7f0c, 0x09c5_6785_2104_16ac,
     0x50ef_76e9_b30d_7626, 0x2b3b_2cdc_19f5_d665, 0xa412_97cd_11d8_f4ff],
    [0xeac9_9a64_9eee_5039, 0xa593_c92f_143c_0065, 0xb314_7352_0307_1206,
     0xea27_61a0_c764_a4ec, 0x02aa_7fd4_6cac_25b3, 0xc68c_c182_a96d_03bf],
    [0xb287_3f02_4ec8_3ca8, 0x9747_0ab8_fd88_53eb, 0x18fe_15c1_59b3_05bd,
     0xb0ab_08f6_87ea_eafd, 0x510a_3fde_7360_2e43, 0x03e1_b84d_ccf0_fcf0],
    [0xd85b_bbdc_8033_c0d8, 0x9223_d9c3_9ca9_f34f, 0x7d3b_cb6d_5b63_c3fd,
     0x1c30_f974_da0c_0fb5, 0x8b24_bc9e_befb_5143, 0xc589_5492_5b7b_84fc],
    [0x6abd_7c2e_0844_d7a7, 0xccf2_ea45_6cdf_530d, 0xe893_8cf5_2b39_21b8,
     0xba02_3ca2_f281_657c, 0xec63_5da6_75d1_edae, 0xb4aa_52f2_2ee1_be6c],
    [0x981c_3ac6_77cb_5904, 0x6a92_b54c_8487_7b49, 0x745b_a6bb_40c5_5815,
     0xb7af_550d_22a3_71ed, 0xd5e8_bd87_c65f_5374, 0x6787_4a37_f0f5_38f5],
    [0xc23b_ba2a_9dec_c021, 0x4e61_0e93_0b0e_3450, 0x1a68_1aa9_1477_577e,
     0x38a3_2097_14ed_c376, 0x0fd1_5563_eeeb_4ab6, 0x7d57_668a_01d4_2178],
    [0x6af8_8ce1_45a0_98b5, 0x1aeb_858c_d88b_8b46, 0xe8b7_33af_b8e2_d6e8,
     0x313f_aa8c_10a7_ebfa, 0x127d_375e_7755_7cea, 0x96bd_a2f7_0b2f_2155],
    [0xec89_0397_8faf_b636, 0xc721_3c42_5c07_9763, 0x7603_8403_6ab6_d17c,
     0xe0c6_3a26_385f_1f49, 0x2998_77d6_811a_6df5, 0x876f_90fc_5304_b88d],
    [0xa6fa_bbc2_d6e0_ba16, 0x9b70_c964_0080_e6bc, 0x29b2_d526_5598_b27b,
     0x4a96_57c7_26e4_397e, 0xa801_ccc6_7666_78d5, 0x800e_f7cc_7261_9998],
    [0x2359_31a8_cf54_90bf, 0xe798_f98e_0e8f_879f, 0xc6ee_e29c_38f3_0ca7,
     0x929a_79f2_d53e_0024, 0x88f2_e127_4958_7a45, 0x0b85_b28f_3889_1965],
    [0x165e_0303_e4a4_d827, 0x6799_4f42_d1e8_436a, 0xe6cc_8bcf_6e13_0d1b,
     0x5010_1711_709d_defc, 0x373b_dec4_0cd0_5328, 0x40b2_74a4_aa51_09f6],
    [0xa9f8_8ba0_08fd_f8c8, 0xecc8_97e3_476e_e05a, 0xbce2_90ab_69d5_7a74,
     0xfa44_db18_11e3_115d, 0x6267_aefd_6448_0c88, 0x2697_d04a_2d3a_eceb],
    [0xc078_2af2_abcd_3313, 0x02ba_1290_f2f9_6273, 0x63c8_2f1a_56ad_c2b9,
     0x10f8_e8c0_3efe_51c4, 0xe3eb_3486_25cc_affd, 0x93d6_0796_9cb8_e7ae],
    [0xcc6e_1794_43e5_8fbc, 0xd21c_93c6_55a7_b8ee, 0x2b98_34a3_1f2b_8ba4,
     0xc83b_6951_6025_ecee, 0x9176_eb7b_427a_ae94, 0x8cb6_5b9e_30b7_a76e],
    [0xc1a3_3a0a_d6ed_d989, 0x18b3_c5d9_5813_b5f7, 0xb024_bd26_3b35_9a8b,
     0xc8c1_7c22_16a9_9b50, 0x71f9_a11d_5823_7729, 0x3aa6_7c76_1828_4290],
    [0x99b7_465e_0920_1c7b, 0x9af8_9fa0_1ca4_fa81, 0xfc2e_c63e_761a_d123,
     0xe2a9_a395_85b1_7d14, 0x0839_4de5_29f9_4e81, 0x4794_48e6_9794_faa4],
    [0x23ca_3d1c_4cbd_cabb, 0xe326_5436_ce1a_37e4, 0x1bbf_10f6_9e8a_4cc9,
     0x05a6_6708_048f_5c4d, 0xe259_dcdd_9c5b_fefe, 0x439e_65fa_fd93_6efd],
    [0xa24d_73b6_978f_719c, 0x3f53_f343_ccb0_bb8e, 0xbe3c_7276_9ee0_7c6a,
     0xfacb_9e53_9cf5_58dd, 0x67b9_1d4e_30de_986a, 0x1db9_13d1_1698_913a],
    [0x98bd_4e14_0dc3_c3c6, 0x142b_1592_bf32_63e8, 0xcdbe_ac59_ed09_5b0e,
     0x9007_63f0_f625_896a, 0xe213_550f_3032_4e39, 0x8a13_a441_7a80_3195],
    [0x2acd_98ed_8c62_6073, 0x1caa_a6b4_c4cf_3238, 0x04dc_b41e_b677_eb5d,
     0xf88b_5844_a810_5b68, 0x981d_9e95_1a06_1a4d, 0xbc94_7189_4c87_8edb],
    [0x4959_fead_5d6c_2dbd, 0x6abd_59e2_8c50_3049, 0x06d2_c549_4caf_8b34,
     0x70e4_5413_04a4_293c, 0x520f_3416_caf2_f503, 0xb23d_09d9_2613_db85],
    [0x26b5_a815_c32d_1791, 0x2c99_e755_5bb0_33c6, 0x09ce_9d6a_0002_514f,
     0xd485_282b_2b8d_7997, 0x9c5b_792f_4a4a_14c6, 0x851d_9d02_dc0b_b4e7],
    [0x62fe_b6ca_cfb0_60ec, 0x9d97_7d69_d5c6_61ea, 0xbf08_efd8_06d8_1556,
     0x25f1_eea4_60ea_5718, 0xa253_46b5_1f5a_9665, 0xd92f_9adc_358c_a274],
    [0x27e6_3dfc_63e8_ffa6, 0xcdb9_cce2_ce99_fda3, 0x979d_5b75_4974_830d,
     0x3298_c840_7d66_93be, 0x629d_5fad_a39b_42b7, 0x2654_d312_71cd_84e1],
    [0xab1f_a4da_f66e_583c, 0xeeb6_b7a2_36d2_4766, 0xa907_38cd_fdf5_c6b3,
     0x28cb_a9e5_648e_2d4c, 0xfde5_bf6c_0cfe_0da3, 0x9d00_b863_d7d7_8485],
    [0x75fb_bf09_4eea_16aa, 0x4893_1f02_7cd7_29f2, 0x5d36_0679_009b_2e7f,
     0xddfc_d148_bd3d_e21a, 0x4dbf_f544_b094_d0e1, 0x9c0e_5c62_9435_2c22],
    [0x283a_27ff_9688_53d2, 0xb096_0c6c_ea0d_03f2, 0x172b_ba07_a473_db38,
     0x688c_87d2_96e6_f4bb, 0x5cb7_e9bc_5d68_cf0f, 0x57a5_d71b_0e47_bfb4],
    [0xde01_08aa_c1e4_ff2f, 0xd346_cfab_eac6_2b99, 0xb72e_203f_98b5_f608,
     0x8185_3d8c_a54b_29be, 0xa6ae_d7c8_9faa_1680, 0xd209_3b15_5c39_d7ed],
    [0x0bae_ac99_d497_4b84, 0xc7f2_58a6_99c9_b4da, 0x6f62_2c5e_4acc_f5c1,
     0x58ab_397d_9781_beaa, 0xbf81_1f67_e101_ffe3, 0xafbc_c288_1c3c_0ef3],
    [0x26b2_11fb_518d_6c3e, 0x64ba_dad5_1a10_784a, 0xe6be_4e06_a587_186c,
     0xd471_f5c6_1343_cd5c, 0x8389_bb0d_d6aa_ed5d, 0xc881_1267_8914_a17d],
    [0x2b2d_0bc3_bb88_d27d, 0xc5a7_d1fa_ff51_7ad2, 0x96f3_9056_a09f_82ad,
     0xfb38_a61a_6ced_4d4e, 0x9d30_8e4e_a6f9_b264, 0x9097_ce29_4aec_c6b3],
    [0x8fca_2b95_0690_b1a2, 0x293e_fcbf_03d4_22df, 0x8c91_25b3_e763_53ab,
     0x3d40_2092_a1a7_0173, 0x9bab_974c_ab9b_f676, 0x5ea8_fcc5_5d8c_586e],
    [0x408c_92e8_c2e1_ec8c, 0x4af4_c914_b71b_4350, 0x5186_aee0_cdfb_1069,
     0x2385_eafa_b965_7c67, 0xf708_e4d3_c898_ca80, 0x1ec8_b9f8_9884_907e],
    [0x46e8_958b_6a2c_1878, 0x2172_fd41_0f78_a647, 0x9d8e_9dd8_3a29_9004,
     0x3909_13c3_265a_d025, 0xd231_f1e2_3077_cbf1, 0xe7ee_3e57_4e80_d7f3],
    [0x5a85_67a3_d85e_40b2, 0x16ec_f161_133f_cf73, 0x52da_5c6f_ba3c_0dd7,
     0x56e5_7983_deb3_4bfb, 0x8325_4fdc_b768_d153, 0x9a14_f95f_35c6_b82d],
    [0x498a_29c6_e19d_4ae6, 0x2ef4_aaf4_6027_ba11, 0xbdba_7daa_84f3_9505,
     0x940b_2a04_f6dc_944d, 0x4e7e_d356_10fc_0d53, 0xbadd_94c2_907e_59e1],
    [0x14df_0fc4_3f47_5f80, 0x17e2_aa8d_264b_f82f, 0x9262_5bdf_e58b_934d,
     0x8384_f415_a4ac_ea81, 0x8e9c_5eae_c5d8_642b, 0x4d8e_f55f_1c82_6687],
    [0x4a23_35c4_f771_28d9, 0x544e_1476_d29a_ba94, 0x654e_c863_2178_5044,
     0xb04a_d9b0_2f80_445a, 0xb0e0_1b64_80c8_d020, 0x596e_325e_88a3_cbbf],
    [0x8969_5515_7448_d062, 0x0db0_8c4c_0f23_6d68, 0x3ba8_fc5b_3cd1_c4a2,
     0x04f5_7c53_e144_535b, 0xb7d0_4dcc_7be4_6840, 0x4bbe_9931_9233_4646],
    [0x1d78_37e6_ab02_ce27, 0x3ea3_5bae_d449_3ea4, 0xd1ca_fdb5_df94_fabe,
     0x98b5_80bb_6217_0c4f, 0xc3c5_7a6c_a942_1c43, 0x68d6_5fc2_c120_1634],
    [0xfaea_babc_4871_7536, 0x4542_51e8_f62f_7315, 0xb318_e8a7_fdcd_c523,
     0x7c2e_8320_13c9_1344, 0x4d9e_5daf_d169_9052, 0x1226_2e8c_8705_37a7],
    [0x8a3e_5d0b_ef84_02a2, 0xa33b_c5fa_fa01_9909, 0x63cb_e8ac_d007_62f5,
     0xea26_a3f1_8198_4178, 0x6eeb_78d1_bb4a_f6bb, 0x7ecf_9671_300e_845f],
    [0x0811_b67c_ccf5_d0fc, 0x9f8c_ab3f_3496_bd6b, 0x57cb_7d24_f135_5c2d,
     0x5821_8594_165b_de80, 0xfaf3_368a_653a_78f8, 0xc04c_d801_7626_7762],
    [0xe641_7ce7_5aaa_23b0, 0x34a7_bfe3_cba6_1761, 0x8c13_e396_f8c9_b6ed,
     0x5c90_6646_4b09_ed63, 0x76cb_6a64_2c5c_e283, 0x498e_082a_3eb4_49c6],
    [0x6f2a_dea6_357b_5aa0, 0x54da_382b_1555_7b69, 0x302b_d819_4623_7aae,
     0x8f0c_bb82_111e_fedc, 0x45dd_2dad_ce20_f2d3, 0x8a77_a5e9_e8a2_d1d8],
    [0xe1ec_3327_3586_2a28, 0x92b6_8b1a_7e9c_7c44, 0xf456_18dc_99e9_63e3,
     0x7cac_9845_02dd_1a73, 0xc865_0598_cd70_840d, 0x9a5d_a584_a26d_4efd],
    [0x16b1_9b01_0740_c15c, 0xb454_4ac0_1016_439a, 0x221f_749c_9e2f_99a5,
     0xa63e_8a27_9a65_570f, 0xc723_1669_add0_72ad, 0xc5bc_35ba_740b_c801],
    [0x6c44_e75a_4f37_8694, 0xd27a_ce10_8a57_7647, 0x17c4_87fa_fa7e_15d6,
     0x6a36_54d5_c8e2_9edf, 0x0ce3_5eed_cc61_1ffa, 0xd88a_8c03_c009_5093],
    [0xcf10_6948_bc4b_1f2c, 0x91c0_dc99_90b9_9712, 0x193b_21e3_e109_ab32,
     0x3340_de06_08dd_1666, 0x8a5b_b677_bf60_2828, 0x402c_410b_1197_b771],
    [0xeb08_0ff4_9ca5_543e, 0xb4b9_4295_42d6_ca27, 0x5999_d45d_c153_3205,
     0xf7ea_9e39_8a1b_ef3e, 0xbe88_1777_5476_dec6, 0x1706_4d77_90c8_4100],
    [0xf332_8e91_50a7_f8d6, 0x52e3_e61b_04ac_fdf8, 0x51d8_2010_f3ce_b015,
     0x59d6_7333_6676_d5d8, 0x4cb3_bcef_1d91_c342, 0x0c58_9ab5_8033_be49],
    [0x54b8_e70e_dce0_3855, 0x7bb5_90e9_9687_fd57, 0x6cff_0868_8d2b_1fdd,
     0xfd0f_6d06_8bfe_994f, 0xeb9b_ce30_2489_ae44, 0x66b2_1f20_0661_e3e4],
    [0x2f5e_0060_1896_69ad, 0x473a_f1d0_3c00_cae4, 0x0278_2992_68d1_f3b4,
     0x8887_14bc_3a7e_c9d2, 0x9ff9_c7f0_71eb_d2d9, 0x875a_5dc2_5dff_db10],
    [0xe2a9_7a3e_4683_99d8, 0x3bf7_eaca_32c8_0da1, 0x13dc_ac8e_b6c2_231d,
     0x227e_c90e_1102_ee97, 0xb234_4832_f038_1434, 0x8613_8883_03b1_90eb],
    [0x3a3d_3b6c_e026_bffe, 0x18d4_953b_9a68_ed59, 0x24bb_7b57_4ab7_77a0,
     0xe0cb_7dd6_4983_dcb1, 0xcf76_8c43_9869_ac97, 0x8062_bc7a_900e_6033],
    [0x39d4_c3b7_8a7a_33c7, 0x43d7_2ef2_2ab0_b4eb, 0x54ae_8184_dda5_0394,
     0x0c2a_7da0_83c3_8536, 0x9dbc_6f92_1d4a_d822, 0x2cbb_61fe_182e_aa42],
    [0xd8ce_9a80_6c0b_d24d, 0xf69d_65a6_5845_727c, 0xc3ff_81cc_76f2_b048,
     0x76b1_fdc3_ca67_ce58, 0xced0_970a_fbcb_e78a, 0x5750_2941_b726_f5f3],
    [0xe006_aec1_7fce_fcf9, 0x05ca_a162_9e00_3591, 0xb705_0cc9_9f58_5312,
     0x6692_6040_1e15_9490, 0x8442_d25a_a757_cc5a, 0x2286_55cd_4038_770c],
    [0x93ee_8d67_d3f1_f3a1, 0xbea4_6d48_dbf8_d7f4, 0x3c91_f02b_8646_453c,
     0x6c3d_7c1f_0418_8a58, 0xefa9_7287_f89c_ef84, 0xcb40_364e_108b_ff4b],
    [0xc6dc_e373_0d4f_f825, 0x02af_54f8_7d97_2790, 0x7d69_d20f_6f4f_788f,
     0x90c2_55c6_4c16_6e8f, 0xa352_9fbf_4bf9_c9a2, 0x3ece_c411_3669_4f6b],
    [0x3de1_0a5e_c6ca_7b3f, 0x7e19_6081_d085_acaa, 0xdf5f_0de3_705d_60f7,
     0x393e_7c83_dcc5_7075, 0xa5f3_3bc2_dcb9_8f97, 0x0aeb_7f05_0d12_04c0],
    [0x6f3b_3b3d_11a8_bc05, 0xb522_69ab_2b95_b8dc, 0x12ed_e24e_b138_5f13,
     0x202b_ba6b_5836_b5e1, 0xee36_36c5_925a_cc49, 0x4222_4cf6_eeb5_09bf],
    [0x5f0c_c3bb_c4be_9a92, 0x5843_13fc_cc54_dd2e, 0xc11f_e90f_0039_4036,
     0x3371_667c_72fc_9723, 0x9611_990b_62ac_8d9f, 0x4cfc_b9eb_3c31_7fad],
    [0xca8e_520a_894a_3fba, 0xbd9e_d1b8_0098_cc40, 0xbdf2_4507_dff3_757c,
     0x47ae_c572_e68d_35ec, 0xf3d4_523d_27b3_73e4, 0x1ab1_1e16_973a_05ab],
    [0xffc2_93a6_c26b_817d, 0x2c9e_9d13_4959_d828, 0x7fa5_2164_0819_9bbf,
     0xa6f0_02de_0dcc_d861, 0xbe8f_9dc5_7f2c_f35d, 0x1352_e2df_86a4_7647],
    [0x84b5_5be1_0170_8e74, 0x3ade_c537_2120_9f3e, 0xb18f_9a1e_68df_adbd,
     0x09a0_5081_9774_cf2d, 0xe4ab_295d_380a_8762, 0xa360_5b0c_689c_239f],
    [0xddc7_031f_bfdf_fe8f, 0x0b17_5de6_5b83_2f0a, 0x3116_2abc_6571_9685,
     0x5121_5e53_4bbc_36b1, 0x9f2f_7d3b_5d01_ae44, 0xcf43_a242_6e83_b61b],
    [0x7e32_db67_2b16_f04a, 0xce6f_45de_0e6a_b788, 0x2571_8548_b8e7_0b41,
     0xd736_8bcf_39a0_fac4, 0x9568_63ec_4988_0c47, 0x720e_3357_9634_1674],
    [0x0670_7a8e_33d9_d6c6, 0xb684_bfe2_6cd5_76c6, 0x44f4_7e5e_cd5f_c46c,
     0xaf1b_23a8_56d8_44b7, 0x98a6_2791_6ac5_657e, 0x040c_3964_a112_7e19],
    [0xa5da_ec31_34c0_a39b, 0x0ca0_4160_bd5a_db1f, 0xb50e_c5a9_f29e_1acb,
     0xbe2f_a112_6af7_bfaf, 0xbefc_0ac4_c9c5_a4b3, 0x9947_39c7_1fb1_eb29],
    [0x6fec_2d34_3e83_a763, 0x5bdb_a571_5757_f50c, 0xd6f6_282e_e46a_11b3,
     0xa8b5_01f5_922a_5524, 0xa782_a210_06b6_05ca, 0xa10b_d2e8_9697_5c81],
    [0xb8aa_e053_2226_d0ed, 0x8918_31c0_470e_84b7, 0x74c8_24d6_48e8_ff28,
     0xb5e4_e02e_ad39_06eb, 0x5abb_086a_da60_a713, 0xa80c_5766_6a9e_29f1],
    [0x529e_3e52_b1e7_230a, 0x0c14_8861_c9f0_8e26, 0x0cfc_8a13_1bad_803d,
     0x8c09_f324_902f_aa9f, 0x0231_ee49_8799_9848, 0x3b06_8849_2e2b_5457],
    [0xefa6_eac5_0368_14cd, 0x0277_3c1f_8daa_5df5, 0x0e4e_edbd_0702_de31,
     0xba7f_d757_d0d7_40ef, 0xa880_5f0c_7400_5f8b, 0x1448_467b_ff3e_1ef8],
    [0x2a07_b766_016a_c70d, 0x6421_5c35_3642_19e9, 0xcd6f_7efe_35fc_f6f1,
     0xf05c_c060_84c2_9267, 0xab3b_f2f3_2579_a444, 0xac75_f42d_9a25_b9c9],
    [0xef3a_14b5_eddb_8464, 0x2314_e080_2d2d_d0e9, 0x14de_aea9_f928_762a,
     0x5763_ebb4_80e1_5a02, 0x25f7_ca14_e8cd_f5e6, 0x8e59_4510_dc61_e6bc],
    [0xe62c_38dc_fd21_000b, 0x7bb3_2ae9_17ee_3da7, 0xe49f_15e2_4cc9_b656,
     0x56e2_8259_dca3_61d8, 0xb43b_8008_a928_5f48, 0x0dc6_b4af_7e4a_e61b],
    [0x703c_6424_1142_dcae, 0x732d_3334_2c45_063a, 0x3787_7ea1_6245_67cb,
     0x2871_d534_614d_d114, 0xe748_092a_1d94_f5d1, 0x4524_056f_0c6d_1cb7],
    [0xe325_b182_3a59_5df9, 0x742d_0dd5_c96f_397c, 0x4436_1c95_40a9_f451,
     0x0238_2f9b_f633_1fb9, 0x8ecb_afbb_e91a_0467, 0x528e_bf38_11f9_04a8],
    [0xfd2b_c653_4631_fb0d, 0x27a5_f036_feeb_9a6c, 0xd0f8_76d7_911d_0775,
     0x12ef_b3a2_9c6e_0b72, 0xdc4b_ca3d_5e87_1da1, 0x028f_b6e6_e608_f46f],
    [0xef17_ecc8_930a_7b4a, 0x9d97_b346_72fb_273d, 0xc6ae_835f_35a2_5d8f,
     0x6c27_4695_30c2_1f5b, 0x2fbc_16a2_6150_e795, 0x02ad_93aa_e0b5_c71a],
    [0x6d24_be43_cf07_dd56, 0x6368_1d62_a38d_2a2f, 0x9872_c9b4_1172_4aa0,
     0xb882_b485_7c19_690a, 0x87b1_ba8d_2804_c6f4, 0xd7b1_99cc_36f4_0b49],
    [0xeefb_8d85_73fd_9e0f, 0x9334_0319_9b91_560a, 0xff0d_b416_65d5_248c,
     0x322e_e105_ea98_4196, 0xdb8c_e0f8_3890_d89b, 0x3a32_f898_3c90_1f80],
    [0x082c_daf9_3f21_5bac, 0x67c1_18a1_b927_4fac, 0xaf74_501c_fb93_198a,
     0x5352_5cab_a0e8_12d3, 0xc9af_3a00_5efe_8a6e, 0xf242_dcb6_0da7_b2fe],
    [0xd388_7fbf_bb73_14df, 0xdddc_ccf0_f720_c342, 0xb2c4_331c_33c8_c415,
     0x1666_0107_67f4_785b, 0x8455_b7c1_fd5d_e487, 0xa821_c5ea_1818_75f2],
    [0x7e28_9831_4185_62f0, 0x2ad1_2e30_42b1_85c3, 0x7c20_d0d7_35a6_ae96,
     0xa68b_ef98_e22c_bd41, 0xa141_1d22_f8d9_3243, 0xd813_fb40_4f3d_2f38],
    [0xe13f_c0a7_6f66_4294, 0x7e21_c9d9_f7fd_ddcb, 0x161e_68b3_66d6_b1f8,
     0x55bf_957e_b574_3874, 0xb232_13ef_8364_d766, 0x529b_b98a_f966_43d4],
    [0x036d_7add_aadb_5c33, 0x0525_835f_802d_032e, 0x7df7_d0d8_d7a2_bef2,
     0x8492_7644_b276_96b7, 0x215e_21e4_d1f9_b5b9, 0x7774_3669_c40e_b7fd],
    [0xa9b3_534b_e889_7784, 0x5bfd_4283_541a_5090, 0x97af_fccd_121c_9778,
     0xc146_c4c9_6379_89c7, 0x0820_e72f_cbda_59c7, 0x5526_e2f4_a0ae_4f4f],
    [0xa473_9e20_fd72_bdc2, 0x6d6e_e5a5_c1a5_4ca6, 0x70a9_7a6f_cb88_4e5c,
     0x2b61_0833_9e97_9c48, 0x93a6_3730_d6bb_23a7, 0x5b1d_ceab_0004_5ee5],
    [0x427c_14e4_f88c_8bdb, 0x1d86_3086_8e03_9bc2, 0x33db_40a2_5150_2d1b,
     0xe043_c9cc_b45d_2b3d, 0x292b_67b6_ee07_7b2d, 0x1c3a_2fbd_e24c_742a],
    [0x3ded_69f3_7016_d86a, 0x9a94_7b13_ac66_d7c3, 0x822d_8645_df4c_b39c,
     0x2ba2_0f98_f19e_10da, 0x6703_138d_422a_c4c4, 0x8d34_d613_8fa0_4a1d],
    [0x28e5_9c8b_257d_112c, 0x8747_068c_c549_9fcf, 0xd6c1_6eb7_80f9_191a,
     0xb416_1516_33f7_af08, 0xa230_e00d_6ba1_a1c3, 0xfd06_6fb9_965b_83d2],
    [0x70f4_bc1b_7f8f_fc37, 0x38dc_0331_e56b_0fdc, 0xa9ab_7290_ad2b_0bbd,
     0xb307_973c_3d07_83c6, 0xbdc4_55f6_cdca_111f, 0x23f0_e083_17b8_f0dc],
    [0x0aee_c24e_9285_c50f, 0x3bcd_a478_33b6_1ace, 0x8399_86f9_59ee_0723,
     0xc959_034a_8d7f_5eb9, 0xd4ad_7e05_b05c_4fb5, 0x6c37_a3d3_9f7a_0ec4],
    [0x0227_b723_0fbf_2d07, 0x28d7_d2ad_632b_ed47, 0x07bd_8f8b_5012_efd0,
     0x48a0_d43a_e040_3442, 0x9b89_3920_7f14_49a1, 0x351e_ad01_b9fd_f219],
    [0xa711_9d2e_311c_ef25, 0x1e53_2cd0_c4ed_0479, 0x2272_f878_d8d3_0a0b,
     0x769c_412c_ed9c_4c42, 0x262f_fbfa_65cb_ddf5, 0xdb73_d867_21ea_368e],
    [0x4bdb_e90b_3fba_dcb2, 0x1324_ec3a_8d6f_ea57, 0x6d9e_fbe5_3085_0d00,
     0x401a_88af_f8a4_c8f4, 0x655c_b76b_8a2e_271c, 0x3550_5b6d_bde1_6f43],
    [0x6e15_e57e_23f5_7037, 0x4962_7373_62c1_fa26, 0xc962_372d_1829_b80b,
     0xa1fe_6832_ea4d_6211, 0x6726_e307_f96e_7763, 0x04c7_6108_1677_505b],
    [0x42e2_ff3a_8a6f_c164, 0xfb85_b2bc_9d28_b268, 0xc559_cff0_2453_3a28,
     0x2ec8_3f39_11da_b3ce, 0xae0f_c74a_9d73_6a27, 0xdb9c_dd04_8bab_4ccf],
    [0xd79c_5222_1d20_e765, 0x499e_dd73_903c_e704, 0x9b01_6d98_7df4_8349,
     0xfcfa_b44a_d12f_c5c1, 0x8112_93f3_b800_fdf9, 0x511d_c619_ca53_cebe],
    [0xa059_ee78_b826_eddf, 0x4673_af29_4d17_c85a, 0x5e52_7d4e_4df2_82b5,
     0xdb5b_9a26_93f9_5ce3, 0x6551_d304_fb54_f296, 0xab3e_b70d_6591_2fcc],
    [0x7d0c_4f67_b6c7_8135, 0x390c_aea7_de30_4d37, 0x49e1_9fab_c8d4_94fe,
     0x1a9e_1b64_37a0_4516, 0x886c_c4bd_ab6a_f35a, 0x0529_2173_44f5_02fe],
    [0x3ced_f341_41b5_2cee, 0x8133_ba92_4753_573f, 0xcb32_be22_bc66_025a,
     0x0c48_0183_de40_3cb3, 0xbf5b_84b4_27df_cf31, 0x7251_428d_b023_2156],
    [0x86fc_e831_c58e_25cb, 0x5cc4_3ffe_45cb_fc75, 0x3387_7cc0_42f1_99be,
     0x1212_fa7f_0cc2_2e1c, 0x448e_ab4b_7d1f_9823, 0xa7b1_363a_9fa7_599e],
    [0x2d8c_2fed_a0e5_106d, 0x192e_3668_38bb_eb3f, 0x3622_6aa6_0ace_a0af,
     0xe7e1_285d_c1f3_926a, 0x9003_71fa_1883_d9ec, 0xbac3_3b1a_f360_eb66],
    [0xd4a2_a116_12bd_e0e3, 0x82ab_0da6_14cb_4cb8, 0x189a_4d50_ac01_f4c6,
     0xe36a_5da1_d9f6_a647, 0xe431_20d6_b16b_11b6, 0x7d39_5f42_36e7_5378],
    [0xc0c1_55cd_47f3_877f, 0x4b03_bfe5_c334_ca71, 0x7771_0f1f_4b84_4ff7,
     0x3443_bbab_720e_8dc5, 0xf03f_8868_c586_3406, 0x0fd6_0511_c872_eb50],
    [0x8c25_3daa_b528_6306, 0x9aa4_38f5_4a61_96ac, 0x181d_08c7_23a2_2c5e,
     0x633c_49c8_8e39_10a1, 0xc9f5_4a67_9926_75b0, 0x1fdd_98ac_bd38_d976],
    [0xa108_93da_7575_a9f7, 0x8f5f_4a02_5ab2_a018, 0xd805_38f0_336b_ffc0,
     0x0f97_51d3_3889_626f, 0x3038_3eb9_25bf_911a, 0xe614_9f68_ce19_cc60],
    [0xb908_1dba_c6be_0598, 0x785d_d9bc_69c7_1492, 0x8b03_5a0c_a56e_172b,
     0x8946_7835_0072_4888, 0xaf1e_57c9_5865_0569, 0xe1de_4e94_4ff2_2261],
    [0xea5e_dc4d_2718_c0d2, 0xcb1c_5d4d_a15a_8ae4, 0xc627_2382_f816_3015,
     0x94a9_34e5_057b_54ce, 0x658e_481a_3d68_d10d, 0xe8f2_4929_e50a_46a0],
    [0x7df1_4628_1af4_82cd, 0x014b_68e7_2640_7b06, 0x6ce5_6493_8c70_ddbc,
     0x36da_d2de_72a5_daa2, 0x6d57_3bf6_9c0b_2980, 0x684d_ab14_b4aa_0329],
    [0x9c69_dc06_4e73_8b5f, 0x83cc_16bd_5a1c_36f5, 0xa99b_365e_6e14_1b12,
     0x2748_fa5a_d0fa_cce8, 0x26d0_73a0_47d9_9c49, 0xb005_b182_505b_0c0c],
    [0x15b6_a2a2_0ed0_fd1c, 0x9333_af72_9bd6_5a25, 0x22cc_3332_93bd_2c1b,
     0xd724_d949_b15e_8be1, 0x69d0_db05_12b9_7117, 0x85ac_a898_0dd7_653c],
    [0x230e_c629_d77b_b3f2, 0x4311_5b99_1d29_7cb2, 0xa2f9_5579_2c53_c76f,
     0x48a7_6728_ebe2_5ba7, 0x7ce6_62a4_0538_4400, 0xddc0_6b7e_6bf4_9d66],
    [0x20dd_b9bd_7644_410b, 0x0563_91b1_fa2e_8c06, 0xca4e_de51_cf16_7c00,
     0x4660_2b55_0536_f870, 0x5040_6725_97c2_1ff4, 0x0af8_ec6e_8afb_844b],
    [0x0023_c574_9251_b883, 0x335a_4f86_d66b_7e00, 0xae35_3ded_3efa_ce8f,
     0x3fc8_0526_d67b_35de, 0x0d90_78fb_da80_bc53, 0x4679_00df_f3fe_4c14],
    [0x0f9c_b2be_6a44_8113, 0xe38d_541b_6a9a_5829, 0x6739_53da_f354_fc0e,
     0x3c81_8a27_7f85_69e9, 0x8d16_ea77_db12_2a3b, 0xe40a_8603_18b6_ea84],
    [0x78ce_11f4_2d7d_5e50, 0x84f7_6dff_199c_998d, 0x999b_578e_3ae9_35cb,
     0xd9fd_092c_1be6_3212, 0x31f3_3c63_acd3_16d8, 0x5aa0_8030_b8d6_5c0c],
    [0x0098_dbe1_9ca8_4fe9, 0xe242_6617_d114_2137, 0x63c3_c416_6a78_e21b,
     0x74b1_4535_3e03_b0e4, 0xf43c_0824_eae5_08c4, 0x58c1_e662_2528_602a],
    [0x9e27_ebe6_d142_6a6f, 0x2a6a_600a_6b5f_a342, 0x8ff7_e230_6ba9_0370,
     0xdf83_d91a_683e_dddd, 0x2957_2442_f022_5388, 0xe9cc_0f1b_6437_320a],
    [0x054d_f380_e896_064e, 0xfab8_1a4a_a3ad_88a4, 0xf874_2648_6cca_156f,
     0xbb1b_3c82_3747_2960, 0x7ec0_b87c_f73f_960a, 0x5c57_d7e6_470f_7808],
    [0x5758_e103_ac61_4a1a, 0x766a_ee86_f813_58df, 0x203f_ba51_dc74_396a,
     0x78c9_3df9_69c5_721f, 0xe69e_32e2_3019_6597, 0xe287_c6ce_cd8a_b95b],
    [0x2a06_a7c1_0c0d_cc97, 0x99d5_2982_68a6_745f, 0xf2d8_18bb_7748_58b3,
     0xd52a_820d_4f64_d886, 0x2f80_8ef8_7a26_3981, 0xbb91_206e_6347_c676],
    [0x0847_c6d7_1ce0_c746, 0x86fd_451b_447c_1e11, 0xc206_23b0_e285_6fcc,
     0x3add_fa2d_0398_181e, 0x6736_a0a0_6b33_6b46, 0xd1c7_0aee_b2b1_257d],
    [0x5633_260d_141a_9776, 0xd530_805f_596c_a3db, 0x8ce3_3ef6_9437_ce46,
     0xf62d_54e9_7e74_7088, 0xdf5c_9318_489b_45ea, 0xa4aa_d29f_0ba8_50ca],
    [0xbdbd_7b16_767f_6d9f, 0xf796_8427_f1b7_b6dd, 0x58c7_6599_b352_76ee,
     0x286f_4c7f_6cad_d791, 0x8188_c040_1742_117b, 0xcec4_f196_4266_d163],
    [0x97e4_e8a6_b513_5b24, 0x8a8b_d785_e529_7977, 0x4545_c1a0_975b_c5bb,
     0x13fa_e3bd_9f59_e37d, 0xafd5_627c_0e91_de2b, 0xa223_ac77_8474_e1a9],
    [0xde1b_f1ea_f86c_6b3b, 0xa246_a3ac_d500_35fe, 0x6f80_179d_d96a_21cd,
     0x3f8d_b7cb_1730_0d03, 0x497a_798b_5d94_506c, 0xad52_dcc6_f61a_e841],
    [0xf4a4_e1d0_8e1f_440b, 0x5e27_633c_d564_22e0, 0x1465_c14f_1db4_1420,
     0x9a93_9043_988d_37c2, 0xcbe6_5cfa_245d_b368, 0x6340_aede_28dd_a855],
    [0x1f7a_b65a_3f89_2454, 0xd70a_b416_7ebe_b5a1, 0x9b26_31e8_24c2_028d,
     0xd5d9_7bde_e315_19bc, 0xea2d_c774_49e4_058c, 0xeb20_4f2d_6d2f_baff],
    [0x6537_e691_71a2_665d, 0x3fd2_f835_435a_3f23, 0xadd5_dd3e_622d_6c8a,
     0xc522_cdd5_e5e2_43f8, 0x5aec_27f3_dbfd_a8a2, 0x477a_65ed_570e_1445],
    [0x3ba7_cb01_d32e_9d63, 0x9e33_5734_e7b5_416b, 0x0ed9_6a84_f945_39f6,
     0x45ce_e2e4_6df5_a70d, 0xde14_2ee1_e9af_ec1c, 0x78d6_121c_4fdc_72dd],
    [0x7bb3_0af6_5339_0b77, 0x2d39_4f2b_7f8f_7bb6, 0x0277_a3c2_13af_3489,
     0x7df6_e674_dd56_d084, 0x5643_cd30_73c4_2451, 0xfab1_5f8b_d1a1_dc18],
    [0x42b4_53ab_f515_0d8b, 0x913f_109c_1188_e18c, 0xc27b_b763_1fb4_3bf9,
     0xebdd_e685_ef10_8419, 0x76d6_7c87_c56d_33ea, 0x95ec_73c0_af40_f084],
    [0xbce4_3d59_a1f5_0bfb, 0xba70_27ca_04d8_4600, 0xfb6f_db98_a2be_644b,
     0xd5de_777e_993d_ed4a, 0xfca3_9f1e_df71_0f3a, 0xa5e5_893c_858d_8841],
    [0xc68a_c776_e6ae_acfc, 0x5380_67c7_8661_06eb, 0xd27b_4a35_2f4e_fde3,
     0x847d_a2b3_bf01_e378, 0x3c79_e3c1_3692_6d58, 0xf957_bc87_26aa_1610],
    [0x9549_2c42_03c7_c612, 0x0dd6_0db1_ee83_21fc, 0xe1d9_eba9_02f6_2b42,
     0xea2d_bf7d_0e37_a4f2, 0xe11f_b909_8bf5_da48, 0xdbfe_213f_818e_a338],
    [0x17cb_2131_6d47_56dd, 0xb889_5249_8140_146a, 0x6481_12f5_8084_4288,
     0x4947_adc3_f7d5_8f35, 0x651c_ce28_e26a_5377, 0x0b38_03da_f337_f89b],
    [0xbeab_16e2_dce6_b6e3, 0x8f39_ecc8_e391_72df, 0x607c_c955_3ff2_9c0e,
     0x4bfd_1515_4f4f_0ba7, 0xee62_30b6_bd40_8ce4, 0x35b6_5411_0d16_4e99],
    [0xaddd_ff1b_d2c1_1cd4, 0x2a1a_262c_ba6e_1aa0, 0x0bf2_291d_0947_5a46,
     0x4c93_a0ab_adf4_de32, 0x73ee_8e13_2733_3e63, 0xf3ae_2031_f5d1_3b28],
    [0x246c_7cab_b2d9_a55c, 0x50e9_c728_2c1e_e0f6, 0x2fbd_a095_65a0_d3d7,
     0x1965_5267_9c04_a4eb, 0x137c_66da_29a6_dd82, 0x08a7_6b6b_4bda_56bf],
    [0x7ca3_c59b_e3e2_8610, 0x6add_75cf_1f7a_e248, 0x0174_7450_737a_6435,
     0xa1f2_259c_b2b4_923b, 0xe0c8_f55e_8ece_7210, 0xd796_4398_f350_b69b],
    [0xe045_864e_d182_5101, 0xac54_9691_93e1_a1c5, 0x23d8_5a93_4d07_94c7,
     0xb4fa_88cb_734a_4213, 0x7c5c_bfd6_bda3_d5f9, 0x6660_7fe9_3874_8825],
    [0xbaf3_6fd2_a180_d481, 0xeac4_40ac_1b95_98f7, 0x9aa2_4d80_ffb7_b06c,
     0x7960_1f51_7358_f163, 0xd107_1831_418b_b63b, 0x8196_09a6_ae7d_3a03],
    [0x3e91_52d8_cdba_e551, 0x86ad_793f_203d_d016, 0xbe3a_eb77_8ad4_a891,
     0x2810_254d_d76b_6618, 0x9b5d_cde3_6636_c327, 0x0a8a_ad65_868b_c58c],
    [0x6d06_7278_0d93_152a, 0xeee7_0524_7b82_8091, 0x9ebd_b976_f137_463f,
     0xa7de_3e73_a2d0_c1bf, 0xf871_a00b_a004_6ac7, 0x484c_96a8_03f2_3486],
    [0x0fc7_bcda_bb06_bffb, 0xf75c_3ffb_3d63_09b3, 0xeca3_05d1_0310_9162,
     0x373f_503b_204f_ff61, 0xce33_2c9f_5496_3fa2, 0x9a44_20a5_2242_cdb4],
    [0xc71d_4811_79d1_98c1, 0x505a_2845_cee9_2569, 0xf339_bff6_dd67_55b5,
     0x8bea_d52b_8de8_9245, 0x4b68_6e65_920d_ca2b, 0x9959_3fa4_3ee6_8a37],
    [0xd90a_68d7_17e6_1501, 0x9bb9_20ae_a191_61a6, 0x2f3d_6f96_d90e_b1e4,
     0xdf15_ecba_1051_3d7d, 0xe6e5_d539_b4f0_1831, 0xc7d1_7a75_28fe_ce36],
    [0xa04f_f0be_b4eb_fbaf, 0xe5e9_0a5b_3dda_a3ca, 0x8453_5422_09f4_a145,
     0x80a6_ffd7_2bb5_a707, 0x14e0_c470_5a1a_bf6a, 0xd699_ec1f_c18a_677d],
    [0x7021_a124_e318_1575, 0xdc7a_ae28_17ad_945f, 0x8bb5_521e_7f0d_565a,
     0x6671_d379_2f08_05ee, 0xd388_8ea3_9441_3a1a, 0xce4d_7e47_b55b_f9cc],
    [0x22f4_4026_3caa_de68, 0xe77b_b287_772e_ac7b, 0x2949_3775_962a_40e9,
     0x1e06_a27f_a68c_b91b, 0xddef_0293_2abd_b9c7, 0x79f0_3b88_dc17_5233],
    [0x65f6_d517_b53e_2391, 0x97db_65a2_f00b_1c39, 0x1d77_ae9b_85aa_4855,
     0x1913_3b9b_3e9b_0771, 0x6376_d9f1_1a7d_b3d4, 0x949a_d02f_5ae1_6184],
    [0xfe44_34cd_e09d_923b, 0x03b0_fcfd_713b_7052, 0x2d71_3290_d4a6_7238,
     0x2b56_946f_f629_ee96, 0x60a1_5d01_b2b3_c428, 0x0b1d_5eaf_7939_33a0],
    [0xbc40_fcfb_0e0d_494b, 0xa31c_4648_c7b3_d1de, 0xf111_3c21_9a07_ec8d,
     0x2378_beb1_a5c2_bd1c, 0x190c_c347_8070_a194, 0x63da_b6e1_ccf5_6329],
    [0x901b_6b9e_82ba_bf91, 0x872a_234c_45d6_1001, 0x6ca4_6a95_c1cc_6d6c,
     0x2277_9315_e0f0_2295, 0x60a5_9396_346b_e6ac, 0xfb67_a503_cb48_8846],
    [0x50d4_40f7_4c97_660b, 0xe71e_cabf_64ed_fe0c, 0x8020_1b89_5718_ce22,
     0xa05d_8980_4d35_d306, 0x8f70_0402_a2b0_d086, 0x326f_cb33_4ca4_dfc0],
    [0xbcfb_d02e_a005_cdd5, 0xf022_5a46_7555_3115, 0x08e1_8b36_92a7_af62,
     0x05d3_4a82_0c8c_ed0a, 0x51a8_d7ce_c33e_80ea, 0x0ac0_0750_3fae_879c],
    [0xf43e_efb5_c83c_521a, 0xe5e9_b05f_c488_41ac, 0x79c5_2c38_bf85_b5f9,
     0x26cd_0818_ae3b_f7a9, 0x4f38_5c32_ca8f_5f74, 0xf17b_2210_7b95_4752],
    [0x1a48_fc96_9198_a4b0, 0xd9a7_8940_bb0c_4e1c, 0x4278_1d9b_e60e_7691,
     0x87d1_caf3_680f_8a30, 0xd09f_f193_606a_af29, 0x4518_dabc_6004_8793],
    [0xf05d_4813_4a56_a034, 0x89a6_5eeb_91dc_69b9, 0x8fc7_f439_60e6_3c62,
     0xfa1c_6b9f_f941_5e92, 0x7e21_9d4e_5634_7935, 0x2b6a_48d6_de0a_ef85],
    [0x1a7f_f9c5_4b04_5ffd, 0x44a0_a956_2e94_68b2, 0xf114_25a2_2d1e_bf92,
     0x208d_3312_0bd2_8e0e, 0xf2d7_4197_af80_e162, 0xceed_ca73_dfe6_6c93],
    [0xd571_9043_9d29_c9a4, 0x44c0_07dc_2b5e_af9d, 0xef6d_df48_a780_cedc,
     0x61b2_05e4_a960_24b1, 0x1885_b6ce_84c3_fe5d, 0xb8b5_6986_b6e2_ce21],
    [0xf36d_acfa_3423_7e99, 0xbe45_eb52_53bc_fed0, 0x402c_6946_b8b2_1ac0,
     0x2460_a6fc_e7e9_cd67, 0xf89a_6d5b_1626_29fc, 0xf66c_cea3_74db_821e],
    [0x16e0_6074_dcc3_1a1d, 0xf172_017a_c3fa_38c3, 0xbbc1_ce4b_b784_ed60,
     0xda89_a8bc_e82a_e671, 0xa6da_cffb_8d26_c0bb, 0x1851_81ae_9609_f6d6],
    [0xf110_dbdd_94d1_7661, 0xf59f_bb4c_ba69_f393, 0x463b_60fb_3f3c_5e00,
     0x1c60_b896_fe8e_78ac, 0x5eb3_e267_95de_5ab6, 0x9973_28d4_654d_6219],
    [0x2106_9118_abe2_4b61, 0x811c_b8c4_8fce_fc6a, 0x483b_032c_fb56_f902,
     0xfb32_e848_198c_c057, 0xa620_8154_62a0_4f70, 0x9000_38d1_8949_59e2],
    [0x5ad5_0978_9bff_ecd0, 0xddcd_5e83_25f6_9ca0, 0x154d_8f1a_cd9b_8c82,
     0xac7d_f75e_94ce_3caf, 0x6d65_54d1_b387_54be, 0xb5db_64af_7384_86e7],
    [0x35a3_08a1_ac9a_43bf, 0x2647_805a_b3e6_e492, 0x4bb7_4a61_6f61_588f,
     0xfa46_02ee_5bdb_f54e, 0x3fdd_6247_0a71_74db, 0x5795_433c_a808_faac],
    [0x51a0_94b8_774c_a605, 0x5f07_974c_74ee_f225, 0x022a_fef7_ad81_a953,
     0x0967_c44b_ba33_6fd6, 0x8aa3_2791_8aec_ba3d, 0xf70b_8436_573c_3f0a],
    [0xcf37_4f83_4207_66c3, 0x71f3_1901_a13e_f07c, 0x63ad_56c7_def9_dc0f,
     0x9e5b_b5e8_59f5_a231, 0xd0bf_453b_b989_3e4c, 0xa1e1_4b66_c271_9760],
    [0xb418_61cc_73fd_3e48, 0x461d_79a1_38b0_4be1, 0x4010_d37d_37fb_a817,
     0x7d96_22aa_6932_25a4, 0x2204_454b_8126_799a, 0x33a5_d487_dccd_6eb6],
    [0xd291_d031_7a05_3320, 0xe276_78f1_e50d_1f76, 0x9a3d_663a_6315_9fc7,
     0xad7b_4d3f_67ba_b452, 0x269c_c05e_2b33_ce1c, 0x0fb8_261c_d734_bcc3],
    [0xf3d0_546d_3d4a_25ee, 0xb428_74ad_28c9_b7f2, 0x73ec_788b_2996_2d28,
     0x4ae7_3a48_132b_8553, 0x756c_99d7_a091_0b66, 0xeca7_e2c2_712d_555c],
    [0x559f_a5bf_2491_1fdd, 0xa1dd_f5de_3770_554b, 0xc7c3_fd13_9366_b946,
     0x6e7e_cc0c_881d_2ba4, 0x14e7_6d6a_27e5_4b87, 0x7352_d5fb_c4fa_b878],
    [0xf19a_622b_ed8d_ac0a, 0x3554_8e5d_7efc_5a2e, 0xcac8_4974_b4f0_57b2,
     0xab31_7ed0_3d03_35ae, 0x710f_c138_f2c5_1738, 0x9c90_cc49_5a40_3416],
    [0x9fa7_deb9_36f1_0461, 0xa152_9b0b_5846_2f9d, 0x9f10_9111_c8b9_ec65,
     0x23a3_eb28_444e_33ea, 0x5540_84ca_7511_8937, 0x599d_58a7_c946_eac2],
    [0x6ec3_aabb_7856_ac4e, 0x980e_6907_c1cb_ccaf, 0x1f85_57ad_c700_cbf5,
     0x7dcb_1ce0_af48_d9f4, 0x7fb3_dadf_8199_ab8a, 0xe6b3_6db8_fadb_f312],
    [0xc00f_0d3f_7a10_1660, 0x605b_94b1_2db6_c697, 0x7994_4f7b_a2b6_5f38,
     0x4085_8ade_dd47_e2bc, 0x1e04_4bdb_0e9f_b02b, 0x86c7_9d01_a310_9539],
    [0x9731_893d_5b98_482a, 0xfb8d_e267_f979_0326, 0x8780_f407_143a_505d,
     0xa41c_aefc_ccd3_a8e3, 0xa042_f0b3_d7b7_a7fe, 0x3e31_51fe_bb19_a1ac],
    [0xe7ed_f679_003a_6950, 0xbafc_97d4_a8c6_ab12, 0x13c0_96b4_9c79_559a,
     0xc305_2501_434b_5019, 0x1280_fb23_e7ad_fb09, 0x1959_905d_31bd_2fc0],
    [0x575c_0c46_fcfc_c65b, 0xfe62_5e87_3f34_b419, 0x1696_fdcc_7f51_b8a3,
     0xc79c_56f3_0e5a_e7c0, 0x14e3_461c_d27f_ad15, 0x1b7b_ccb9_cb47_2859],
    [0x3806_fe58_e5cc_8f16, 0xf824_4ed7_6734_c1bf, 0x4e04_940e_0f5d_db56,
     0x5bd0_afdd_c415_8b7b, 0xa4c6_ba94_9911_c5c9, 0xff6e_2ac1_55ae_9726],
    [0x49c7_c844_b811_4144, 0xb450_e41b_ca35_cb00, 0x3024_50ec_67be_f97c,
     0xa866_2049_db1e_0d8b, 0xda69_c022_528e_b8fa, 0x6abb_f165_85c1_a2f7],
    [0x37bb_420d_f67f_044e, 0xdcc0_e9f3_e2ef_07b3, 0x4d10_0886_1877_7841,
     0x0492_e537_9305_daae, 0x3da4_791c_37e4_128f, 0x8068_8445_cba4_ea17],
    [0x5139_8a7c_e4cf_8d9d, 0x49a5_fcd8_91a6_9ca5, 0x3d72_a60e_c239_2da5,
     0x0e82_96b8_79ab_5539, 0x6bcb_00af_2edc_0bde, 0xbeb9_3848_e54b_3e90],
    [0x7ad7_c52a_1892_2e19, 0x2929_2c57_c4f5_b8f5, 0xf0cf_1f98_a577_c10b,
     0x072b_9f29_3bb6_60cd, 0x09b8_604f_5575_b6fb, 0xdecb_396a_81b9_fcdb],
    [0x254a_d7ad_b4c2_20de, 0x6c62_e20f_95a0_070d, 0xadeb_89f3_3930_9bd8,
     0xa2f6_85cc_178b_289f, 0x9343_905b_5dee_95a5, 0xe0c3_0f34_a297_7c86],
    [0x669c_d51a_f7cf_bfaa, 0xe3e0_806f_6880_271d, 0x6934_c259_e098_bf90,
     0x5dfe_eaf0_fbca_7249, 0x89f7_4b94_8b41_18b6, 0x5364_0aea_fb68_07c3],
    [0xdd3b_acdc_c04b_e120, 0x6d49_49bd_6419_8e51, 0x31fd_b396_6659_8a74,
     0xbbbc_6de9_c0c1_5a81, 0xf27f_201c_61c0_6279, 0x2738_afe3_e84e_5cdd],
    [0xcdd7_1fd3_5a64_11de, 0x3cc0_1279_3e87_523f, 0xb0cf_f872_0fca_36f3,
     0x93e8_5fe0_7300_f012, 0xe894_a085_263f_090b, 0x2df6_0a01_dafa_90ec],
    [0x9da5_0db1_eeb4_fadd, 0xe524_e49c_9974_799a, 0xde09_fff2_6a24_cbb9,
     0xaf9d_71e9_f3ac_e7cd, 0xeb62_b1a6_2566_ec9d, 0x06d0_2ab1_217d_3553],
    [0xdd31_e639_1ae0_3522, 0x93ac_d106_5b35_e915, 0xf4eb_56cc_03e7_9218,
     0x0717_815c_850c_97f1, 0xbf4f_6a8a_c054_0a6f, 0xfcf8_ae5d_e950_7ff0],
    [0xab45_b413_dc50_b207, 0x40b4_1736_9551_d8d5, 0xca32_286a_108e_7210,
     0x0322_5e54_d8d0_93af, 0x4b6c_a559_1ea5_76e9, 0x4e12_ab77_4dc4_e062],
    [0xd9f4_f850_df6c_b96c, 0x8aba_d81b_1667_335d, 0xcb40_79cf_e79c_72e5,
     0xe554_2f76_3e31_6996, 0x303e_4b79_b9d3_97c4, 0xe469_3303_8b94_5111],
    [0x75b1_5cc5_3b0d_2502, 0xda1b_ca6b_a052_4358, 0x9eda_9775_56c0_6b7e,
     0x6c57_727e_cf0a_1325, 0xdc61_3d5a_78e5_c3f8, 0xce06_2d94_a3b4_945a],
];

/// Per-byte addition constants, added to each state word before it enters the
/// mixing function. Same row selection as [`XOR_CONSTANTS`].
#[rustfmt::skip]
pub const ADD_CONSTANTS: [[u64; STATE_SIZE]; TABLE_ROWS] = [
    [0x7d80_58c2_8996_5a68, 0xa40e_3ac9_3f6e_ec96, 0x4296_2ab5_6a64_da88,
     0xfb63_91d2_5934_aa91, 0xd995_8f7e_87af_cdcc, 0x9883_14d1_82c9_f6f8],
    [0x1c46_0224_d662_7d46, 0x0c83_38ed_6877_a302, 0x0996_8684_8a2d_1e6b,
     0x43b3_6d21_5d7b_fb49, 0xb387_86f8_94db_7c04, 0x6f46_38aa_e0b6_8b90],
    [0xd673_b058_2ac7_21ce, 0x07d1_1ccd_ba43_618b, 0xd68f_9b3f_987f_9c39,
     0x1bc6_9ca5_367d_c351, 0x1931_5fb5_2314_57d5, 0xbc49_ff80_23c4_ff51],
    [0x6179_643a_91a3_2de4, 0x1887_2e1d_ef8d_3303, 0x7fbd_d831_5412_da52,
     0xf1a8_b5ca_b53f_a8ab, 0x801d_e3f4_8ac2_3ac6, 0xaf7a_e49c_8161_aa48],
    [0x0c9b_6a8c_119b_b0bb, 0x0de5_5ae8_5d1e_20e1, 0x48b7_435d_c9cb_6b41,
     0xa3a6_e2e4_4fef_6841, 0xf916_69e8_68b8_0060, 0x214b_cf90_8258_cacb],
    [0x4594_391d_e294_7db2, 0x3e65_71cc_6e9f_c2bc, 0x6406_7abb_c822_3821,
     0xbeb4_f183_4702_e047, 0xb4f1_06d9_a146_be05, 0x9b9d_e8fe_614b_6843],
    [0x0937_5bd6_dc4c_374e, 0x8cb3_1691_eb60_e267, 0xa915_b81d_f036_5544,
     0x9f04_7ab0_5448_3b51, 0xd01f_c79b_688e_9c7e, 0xccb8_a7de_2359_118b],
    [0xf727_0d40_bcec_ddb0, 0xc4f7_3bc4_5fbd_7e70, 0xd70f_e5ef_8950_7e10,
     0xe3a6_4dad_d16a_7bc9, 0xce01_6154_b38c_f9d6, 0xa606_a6c6_dfd8_5353],
    [0xf8b9_6ee4_88e0_0ca4, 0x0689_55ee_aef5_8101, 0x4bab_59cf_6a61_c1cc,
     0x3fe0_542f_5ee9_aa03, 0xf690_8622_3881_93fc, 0xb78b_a6ee_f477_74c5],
    [0x798f_73b2_2108_adae, 0x37d7_2947_bb13_0490, 0xa43d_1e4c_39ac_fc00,
     0xceb1_1d35_4147_62b1, 0xe88d_1cf5_6002_0aa4, 0xe203_22f9_1574_91c8],
    [0xda61_5fcb_b078_e1be, 0x28f3_09e1_ec35_ac02, 0x64b7_5abb_1d84_d8ae,
     0x3b9a_da20_5af0_5e6e, 0x0d6b_8ee8_8fcb_c8ef, 0xaf8a_ad01_1769_c943],
    [0x1251_c038_1802_01dc, 0x9a63_05c7_57bf_fe37, 0xdb96_2943_cd1c_1956,
     0x8a94_c2b9_5a56_9a74, 0xfbb4_ea7c_a016_049d, 0xf303_048f_4477_f00a],
    [0x1637_2888_cb69_11e6, 0x30c5_79d5_acbc_6f67, 0xc41b_20d0_0bea_9005,
     0x8819_90c9_da4d_0240, 0x0599_214f_8dab_b860, 0xe449_620a_e3a5_35c8],
    [0x1169_13ea_f90b_1d84, 0x5e4e_1961_34b1_e8e1, 0x4b8f_4321_2575_ed59,
     0x9c76_98b6_cd7e_c34f, 0x94c1_2a54_396b_f23e, 0xe9ff_19d8_02d1_1909],
    [0x8c6b_a0e8_5a04_768a, 0x8d37_b3f0_b655_0290, 0xc7c2_087d_733e_9c5d,
     0xa7b9_32b8_e1e9_f298, 0x3851_22c4_01e9_ccc7, 0xb3eb_819f_f727_425a],
    [0x5f75_dbfb_1ab0_9d6c, 0xb837_083c_ac1d_4197, 0xd9af_8914_2b75_7260,
     0xac1f_71e7_1de3_fe48, 0x71f7_1a44_098c_5790, 0x0293_e402_2d18_395e],
    [0xc8fb_61b0_8800_3d36, 0x3cfe_1604_b507_7f1c, 0x4d2c_22dd_6706_bbc9,
     0x39d0_56a9_bb30_7d41, 0x2d86_532a_a15f_3a94, 0xa4af_1fa8_2acc_017a],
    [0x7469_7ea1_2b79_dd5c, 0xa626_5a2f_060d_0937, 0xed8e_fe88_eea8_5d70,
     0x9fa3_7ca8_284e_09d5, 0x1d1d_438e_3048_c097, 0xa519_8833_62a1_dae2],
    [0x6856_0840_baaa_e48a, 0xd038_1c27_b707_f307, 0x3a8f_4e24_db22_f809,
     0xacf5_526d_582f_1a64, 0xc07c_e4e3_35ec_904d, 0xe2fb_f875_c3dc_4970],
    [0x5201_7982_b274_69ef, 0xc67a_9fc8_a2f0_76a4, 0xf9d7_147c_e22c_e931,
     0x2dc1_53af_477e_b32f, 0xe139_6b65_889a_0890, 0x874e_5d7a_aea9_2ac4],
    [0xe617_bee1_cc4c_bd99, 0xaced_2bab_bdca_6939, 0x6385_50e7_6297_b871,
     0xaaf0_3af6_5e17_8f21, 0x5b7d_12fd_81ca_b450, 0x6772_aca9_bce1_d19d],
    [0x5e71_b2b3_41ef_eb7a, 0x1eac_0b05_de6f_ee0a, 0x5886_f65e_db18_c054,
     0x8b57_5466_c729_b380, 0xce33_0220_886a_7a0a, 0x28df_f2ff_1786_d02f],
    [0x8027_24c7_b270_6def, 0x33fe_5214_7d2a_e900, 0xc8ee_aa5e_a3b7_ba1c,
     0xbbd4_7f20_5d8f_423e, 0xb2d0_ce5f_3a08_af46, 0xad53_5615_cc83_f30a],
    [0xc9b3_7bd9_62ab_7542, 0x173d_188f_8cae_9d63, 0xf366_7a49_8076_fd60,
     0x08e7_74f0_f7e1_92e4, 0xaf4f_f778_03a1_6cb8, 0xafe7_0cd9_cdf3_27d6],
    [0xd3a1_9143_201e_15aa, 0x1025_bcae_b555_4a50, 0x59b8_767f_dcaf_8440,
     0x9245_3353_c9fb_884f, 0xf327_42ed_3401_e9d0, 0x8c38_2e0e_82b5_c522],
    [0xcf0b_5908_b90b_7c7a, 0xda71_c53c_ae38_6706, 0x4f91_d6ed_ca05_cb68,
     0x8687_e6b8_df5c_c6f3, 0xa388_0f9b_1be4_e7c2, 0xb03f_60e1_b5e4_910e],
    [0xf4c3_b389_7810_69c6, 0xf54f_3e15_fcc2_a228, 0xf97b_887f_2804_35c0,
     0xa583_dfec_4e50_a8c0, 0x9675_e5b4_17ed_c206, 0x618f_6826_807d_f5af],
    [0x8346_6c0d_2d22_615a, 0x8b45_20e1_9e06_f207, 0x4d8b_659e_2502_e034,
     0x9d65_3da0_4be0_e9a9, 0x0757_12f7_ba04_c6a8, 0x83e2_676a_06d5_0698],
    [0xfc65_33cc_efb8_f372, 0x00d6_1064_ff94_f011, 0x0989_3af7_fa32_5361,
     0x88c2_bd50_bb51_8b5f, 0x9868_cb65_e9b2_209c, 0xf327_d227_b712_8e8e],
    [0x7d5f_0333_c85e_ba92, 0xb2a4_4bc9_ce37_f22b, 0xd6b7_1f1a_308f_64c9,
     0xa9a0_3a8a_9fc9_8e19, 0xb18b_eb65_9b14_8f96, 0xe7ff_1073_c89d_d552],
    [0x53c4_42c7_718b_75bc, 0xe8b4_4ac1_e242_6a18, 0x5a0f_bac9_6a72_0dd7,
     0x5ae9_71ed_50f5_c272, 0xbbdb_6bc6_82c8_f3a4, 0xe13c_b728_c55c_6096],
    [0x5abd_70eb_9ec9_f62d, 0xb0ef_3da1_18b4_4783, 0xda82_ebaa_ec86_9682,
     0x8aa4_1d68_4388_d533, 0x9235_6371_10ad_1e04, 0xbb2f_8b40_082c_0b8c],
    [0x9683_7b86_7a03_e5e8, 0x8c26_69ab_8056_71c7, 0xf327_32da_5371_97ae,
     0x9590_8762_f114_eb00, 0xfca7_f60d_bf08_2ad7, 0xa37e_c2e7_80d2_5948],
    [0x7f21_f2e0_04aa_d61a, 0xd866_36c5_909c_7b39, 0x513e_16ee_a170_fadf,
     0xb725_bc2b_77c7_eb60, 0xb17c_8d89_ac01_1fee, 0xcddf_2930_b7ef_bf0a],
    [0xca1f_338e_b96f_5bc1, 0x062d_44e4_9a20_ae12, 0x156d_bb2e_7b71_be10,
     0xa038_f0f9_4be6_8990, 0x23e6_8370_ae68_5cd5, 0xc63a_5ab2_7069_e983],
    [0x8ff4_583a_6399_a1a7, 0xa73a_26bd_26f6_7e05, 0x5d91_489a_52f5_d590,
     0xb3a2_77b5_5047_d949, 0xae22_8974_3521_bc08, 0x75db_bb30_f5c1_901a],
    [0x47e1_3042_e97a_fe13, 0x2a9f_408d_94be_a397, 0x6fcf_5e49_1356_ced8,
     0x75d0_2304_4f64_5350, 0xb82d_60dd_e48f_54c0, 0x7e0b_6766_4831_3427],
    [0x6485_8bb4_2aa0_07e0, 0x804c_6b35_0c62_7021, 0x5c1f_e2fd_591e_f9cc,
     0x4666_7218_02ee_9743, 0x1123_44f4_d05b_4de4, 0xaf2a_c071_6c42_3d1a],
    [0x5a81_c321_77ce_6fd4, 0x00e8_19a6_2c37_7a64, 0xbde2_2a6b_206a_f003,
     0xe7f8_2e14_5905_c381, 0x2317_8ba6_e9ae_d6fa, 0xb1b9_6c84_a900_ba62],
    [0xa723_0393_d376_be98, 0x47cf_7e20_20d6_f126, 0x57a2_f211_bc4c_101b,
     0x8eef_f7f3_13a5_5b71, 0xa158_5260_3d83_808f, 0xa40f_66be_1468_719a],
    [0x93ac_6c69_32a1_f9e7, 0x910e_1991_8e17_5673, 0x58af_127d_1ade_8a7d,
     0x7cba_0ff0_53c6_ad51, 0xf2df_666a_a9d6_c55e, 0x7c3f_baff_36ed_b3a3],
    [0x49b1_2ac6_6082_c518, 0xbd27_d5dc_cec1_7332, 0xdc95_1ac2_3d02_1869,
     0xfb36_c7f6_4c64_078b, 0x6259_0331_579b_46bd, 0xe45b_1a06_ce80_2308],
    [0xb2c3_604a_aab0_1949, 0xb6a3_2902_676c_a87a, 0x8ba1_a6d8_983a_eac9,
     0x3ef5_b1ec_87c5_c9c8, 0x632b_9b91_591b_524c, 0xf7ae_afd5_e1ed_580a],
    [0xd038_2a83_80b2_f1fb, 0x9fa0_1fb5_2d14_cf12, 0x2224_b929_9058_b751,
     0x1f60_eb18_8d54_fb18, 0x56e0_28fe_148a_d6a0, 0xa76d_cc72_b754_b578],
    [0x1b13_108b_02aa_6909, 0x9d3d_1e29_6ede_cc6d, 0x25ab_0a87_fce0_68c1,
     0x4591_2228_513a_5748, 0x16a1_4185_aa83_27d6, 0xb423_92bb_4d45_ef89],
    [0xa1d7_7344_920f_f03d, 0x0ed4_3da5_a7bb_f945, 0x44cc_6251_f9e4_f646,
     0x59b5_53f3_06c4_8b8a, 0x703d_2db6_9a7d_cf92, 0x278d_b0a6_73b1_eb1e],
    [0x8e03_2861_e1fa_89f0, 0x513b_13b1_2f22_ab11, 0x7103_6858_3d2c_d42a,
     0xb284_ce6d_253e_ee93, 0x794d_2b43_8401_37f4, 0x6ba5_f09b_20f8_462f],
    [0x1543_6111_ca65_657c, 0x71a0_54bd_169b_4953, 0x6204_9c6c_7b54_71c3,
     0xab2a_2b21_5a67_4ce8, 0xd122_1a35_1baa_696c, 0x93be_1bfe_0a61_4603],
    [0x32c7_33c5_a828_f00b, 0x110f_3998_01ac_ee05, 0x9f14_cc08_4085_3875,
     0x6e88_f1a7_627f_ae58, 0xb806_0330_d90d_b2fb, 0xa8b9_d6a9_9646_be60],
    [0xca15_a83d_330e_9fc0, 0x30b9_34c3_3f0c_b130, 0x1706_9ed0_bff4_c5f5,
     0x3f52_fbf3_9228_7423, 0xaab3_cdd4_d8cd_a382, 0x231b_0ac2_9249_1fe0],
    [0xf02a_b956_6b53_a895, 0x133d_20a7_cf1c_ee15, 0x0f4a_39a3_6a14_70e5,
     0x533e_5e3d_6dd5_736b, 0xf31d_7a2d_49d1_68c6, 0x2dda_4bd3_c1cc_68c8],
    [0x172d_6d06_fabc_b264, 0x6fa2_9a33_0e36_3099, 0x320d_036b_9c02_7050,
     0xf751_b0b1_5e9d_1625, 0x3ee5_2738_1965_7ade, 0xc212_652a_abc6_e78a],
    [0xfee1_424b_fe30_29f1, 0x29b4_328b_9328_13c6, 0x40df_970f_e818_b040,
     0x9230_2aae_f34d_aff6, 0xaae0_5776_b89b_aeab, 0x40c9_889c_6044_0d54],
    [0x5e05_28dd_38a9_64b2, 0x3f28_0772_bba6_f7f8, 0xe59b_c201_aa3c_18f6,
     0x4b30_3783_3bf5_8159, 0x5386_b685_5ea3_d81e, 0x072b_41d4_96f8_d86f],
    [0xd10f_321c_5888_3051, 0xf512_2ab5_3cbd_aca0, 0x70e5_f26c_ef85_c03d,
     0xdf85_840f_2101_0126, 0xfb52_964c_8a9e_5098, 0xd57b_e9a2_c151_1532],
    [0xd4f3_4b50_f922_a024, 0x6ba9_fbe0_7c18_5482, 0xb90c_7e15_febf_7af7,
     0xa806_293c_6065_cf86, 0xa415_8143_b26b_d592, 0x3ef3_4df6_85ee_f5ca],
    [0x2bd9_4af4_7225_63d0, 0x7cfd_11ac_f73c_3b20, 0xc0b1_c431_1011_54b1,
     0xf785_1938_42c2_4110, 0x159c_da6c_1085_63d5, 0x4866_b3f8_8380_e5e6],
    [0xc5c7_7ce0_5c3f_a920, 0x0065_59f7_6a04_9f3e, 0xea62_873b_ec37_8339,
     0x2167_933d_052d_9e18, 0xb804_358c_f8c0_4d3c, 0xe49a_2228_1f41_480c],
    [0xde97_7aa3_46c1_3c95, 0x0946_36d6_a712_f836, 0xce45_cf3e_5d3b_7e21,
     0x1c83_9903_78ac_e264, 0xde89_c2ba_dce1_71c8, 0x22ff_4d93_5ca9_850a],
    [0x4341_3aa1_c370_e983, 0x8006_cce0_2d74_28c7, 0xe63f_2069_fe13_13d3,
     0xf8b6_7cbf_92c9_d3e3, 0xcabe_8add_2235_777e, 0x0480_50f6_8a67_8178],
    [0xa1f1_021b_a584_6050, 0xac7d_55a1_1a3d_e4d1, 0xeb46_2056_10de_2660,
     0xa78b_1725_3df7_8fe7, 0xac8a_42ce_d4c4_5b4e, 0xc619_f830_d2cf_4d8c],
    [0xd1d4_5e43_30f5_ffd8, 0x12f3_68b4_2e99_e598, 0x9533_4607_c1de_d3c9,
     0xd6c7_7aca_7af1_6231, 0xc8a7_2710_a643_1032, 0xc5fa_41bf_6285_269c],
    [0x6fe8_c2b7_b32a_fcd1, 0x3326_6cf1_bc26_6852, 0xb7de_e777_f460_f16d,
     0xad06_97a9_d35e_2ede, 0xd417_2ebb_a313_7515, 0x772a_bf88_fd00_54cc],
    [0x5539_6011_142c_bcc3, 0x075d_e9a9_8d29_f336, 0xac8b_2eeb_e877_0d49,
     0x1b0d_817b_6251_7938, 0x4c4b_ab76_3bcb_33ce, 0x0b13_7a31_ac17_581b],
    [0x94f1_2cde_96ba_6bd2, 0xfc2c_b9ff_b139_e6a6, 0x6d27_31dc_bfe8_5d63,
     0x71e4_2cb3_4abf_4ad6, 0x99bf_7270_db61_be4c, 0xf4ba_0ba3_1d5c_b61e],
    [0x3b65_fb61_284c_73b4, 0x5f89_d880_8763_afac, 0x7a0f_8167_d9c6_9bb0,
     0xbd27_b760_a461_aaac, 0xb1bf_104f_7e03_b6cc, 0x316a_1893_7508_0992],
    [0xde26_a142_18b1_1558, 0x0f6e_78eb_ae16_dd20, 0x003d_c052_b706_2183,
     0x97ae_533e_9e5c_cab3, 0xbc2f_c2d5_abee_5b09, 0x7c21_9189_f8ac_3ae3],
    [0x4834_7af0_daf5_19bb, 0x7520_a9a5_a488_e209, 0xca75_32cf_3848_f90e,
     0x85ae_a3f5_3afb_f19d, 0x8881_e60d_fc45_e690, 0x3a61_3d64_5365_5baa],
    [0x571f_98c7_b9e7_196c, 0x2543_2582_f555_97a5, 0xa0d7_245b_7342_5c59,
     0x5f16_2bac_31ff_98e0, 0x92d6_0878_8155_aba8, 0xb53f_6a33_99a2_cddf],
    [0x526e_a8a7_a86e_5a58, 0x5ffb_5c59_e44c_c4e0, 0x6dcd_32d2_4479_fb01,
     0x78a2_2f7b_2249_ca31, 0x7a43_6f04_10e4_1c4d, 0x0b8a_a84c_46c2_a54a],
    [0xe72b_ebf0_2d81_88f3, 0x187e_3979_7296_cafd, 0x7f45_0b19_bb42_8c69,
     0x7b87_73b2_d887_1bba, 0xa9f3_8f2b_9429_101f, 0x0b6a_62d2_cb26_8db5],
    [0xace3_b97a_6374_ff68, 0x2d71_5575_8934_8a28, 0x1af9_423b_6a20_8bd5,
     0x4d84_4c43_52d6_7ad6, 0xfb01_30e2_d32e_100a, 0x827c_16b0_e0e1_5f58],
    [0x78f0_b865_3b0d_18fd, 0x1d7d_0b7a_15d5_e306, 0xb61b_9a89_dfa6_220f,
     0xa5b2_2e95_07d0_ce70, 0xefce_8136_b809_4c5d, 0x8d56_dd3e_8320_571e],
    [0x40b2_98d2_43d4_32e6, 0xd6b7_50a1_9212_b772, 0x6f9d_873a_c1a0_b5fd,
     0xe8ac_4064_09a6_872f, 0x9a46_9696_b9c1_fa72, 0x9384_8ea3_8124_b42b],
    [0xe4c1_448e_c8cc_58b8, 0x76cb_3565_2609_202f, 0x9494_b86a_0626_21f7,
     0x6015_6a21_e1d1_a861, 0xa0ef_7e66_bca1_4c10, 0x686b_d6d2_1d82_5969],
    [0x29be_ca48_7442_e3f1, 0x7056_63e3_3aa1_2922, 0x3cdd_921e_4c76_79a0,
     0x9371_e7bb_0ff9_d9fc, 0x3209_288c_2928_3298, 0xbc97_e7ff_1a8e_fdf9],
    [0x49c0_e9d5_ef0d_c498, 0x20ae_2050_4a3b_8535, 0xabb1_d036_d70c_d941,
     0x149d_24ec_9d61_e114, 0xbef1_e86c_ba59_5de8, 0xaf0d_28a0_af5d_fbb9],
    [0x9a37_71e7_0ebf_65c5, 0x9dd4_c2d1_27a8_039c, 0xff1a_7e13_93c3_64eb,
     0xeb85_6efc_41db_2acd, 0x3dba_b2e4_ac7a_4c88, 0xba8c_2ce0_90c6_11a9],
    [0xd583_f464_fc44_a171, 0x1dbf_5431_c1a2_caaf, 0x57b3_775b_16e8_d883,
     0xac61_d57d_b8ca_91c5, 0xdacf_0ad6_01ca_cd66, 0xce5b_41e2_9d0d_e6d2],
    [0x994f_c880_6227_3d20, 0x198f_252a_e17f_369b, 0x7076_53c6_aef6_ef26,
     0xfa8c_ee95_59c0_a3b8, 0x9838_48f2_0a8b_f25d, 0x868f_dc20_6a08_54a0],
    [0x6353_1ac9_c435_9cfe, 0x5c22_759d_cd60_d0b6, 0x954d_6b25_fdc9_c3bb,
     0x3299_3504_e3d5_530c, 0xb39b_c4e5_8128_5e4a, 0xa113_930c_bcc4_76fb],
    [0x4aff_c564_e974_5ea1, 0xcd50_f293_2dbe_e0f7, 0x1032_9845_9832_9f15,
     0x9941_126e_11f6_d9db, 0xadfd_9221_83c0_6e74, 0xa19b_6d25_4480_8965],
    [0x9eb3_1084_ef95_fef1, 0x729b_4de7_cd5b_fa76, 0x9e4f_5b94_0206_737e,
     0x6705_8ae2_316a_80f2, 0x51b2_1b85_30e9_9b98, 0xaed2_8138_b275_a1d3],
    [0x7723_c4c7_401a_2b37, 0x54e0_5855_9b3a_f793, 0xf0a9_ec51_7e50_e5a5,
     0x429d_a5b6_48a2_bb41, 0x2880_39fc_335d_f40d, 0xaff3_c95f_f127_0b84],
    [0x4d66_b032_7425_e5bd, 0x150b_198a_06ec_b238, 0x2dcd_af4c_35ce_47c5,
     0x42a1_aafa_9b86_ca17, 0xd5a4_16ca_8ba5_b7a4, 0xac4b_e5c6_a3cf_c804],
    [0x955e_6ed8_69a9_6efd, 0xb85b_562a_0d3c_2356, 0xca5d_2256_c809_80db,
     0xd9d6_bf37_e9ea_2739, 0xfd65_89b4_a163_2dae, 0xaee8_a866_5539_7ad3],
    [0xdd13_8357_abc5_d9a4, 0x5825_3fbc_e2af_893b, 0xefb9_6a2c_bb3a_4995,
     0xab05_9e2a_6b24_eb2b, 0x7fcf_6ddc_799f_2e0a, 0x7490_ff60_7212_e7fa],
    [0xd477_53d0_3f6a_7cb2, 0xeebd_589b_b4b8_1439, 0x9e7f_083c_1e48_d465,
     0x99f4_ac9b_24b4_d403, 0xca1e_18b7_341a_0c6a, 0xd927_d48a_fa8d_48aa],
    [0xcac4_e3e4_0974_60f2, 0x59a3_1f4b_fc89_d1a1, 0x7e90_27f8_fae1_25f1,
     0x643e_b681_56f4_13d8, 0x6c64_525f_84c8_3a82, 0xad97_a095_4899_9292],
    [0xb98b_b614_d1b9_7b3d, 0x6865_5991_3959_d004, 0x7e1d_4ea2_92f7_5119,
     0x9879_07a9_5dcc_aad2, 0x0367_434c_0605_031a, 0x0b4e_5dc7_3d45_0c6b],
    [0x9dc9_0461_e4c0_1281, 0x5d62_4a0b_bac1_060e, 0x4000_3a12_f9d1_7b5c,
     0xbdc7_2495_eb56_f20a, 0x5216_4ec4_ffad_a430, 0xaf16_60b1_ebad_29c6],
    [0xcf26_31f3_a009_75d1, 0xc457_d947_c598_615a, 0x9393_63c9_fc07_c9b8,
     0x3171_2e21_4967_8c18, 0xbe33_c87a_4cb7_db2b, 0x5351_e4bf_294c_eb48],
    [0x884b_2903_01cf_3a77, 0x687c_20eb_c40b_8084, 0x9da5_834d_7014_50fa,
     0x9904_b5df_529e_d2c5, 0x36b6_b441_548a_d976, 0xec0f_ac65_f722_02d8],
    [0x4963_6ec5_1531_9667, 0x7e37_23b6_c9f2_bc0a, 0xdc98_30a2_75ce_ad6b,
     0xa0c0_3c2b_5545_cfc1, 0x7920_6e94_38ce_f1ec, 0x323a_48d2_418b_cb7d],
    [0xd594_3e9a_7925_16e7, 0x5e64_d8c5_140f_9be1, 0x1c90_7c1c_7ca4_da05,
     0xff82_ae69_27db_dfc9, 0x3a78_fa37_ef8d_734e, 0xe6ee_0491_be74_60f5],
    [0x58ca_1a4e_8433_2e63, 0x3afd_9e30_0ca5_30a5, 0xd3c1_9661_390e_5d17,
     0x0ba5_3929_9074_a7ea, 0x3cd7_4c3a_ed20_a418, 0x8b50_ca03_f2ed_504b],
    [0xa003_d052_eda9_f9fe, 0xb140_48fb_cbb6_23a0, 0xc582_2ce4_4e3a_ef19,
     0x8d16_5342_c6f5_4d95, 0x2ab4_6ec2_7c1d_ff9f, 0x8e56_8cae_dd48_2cab],
    [0xc7af_417a_a594_66a6, 0x14f5_6a3c_e906_f87d, 0x22dc_95d0_c20d_c86d,
     0xb632_cff8_22e2_cb24, 0x1fb5_6250_2e29_7678, 0x173b_1c67_5bc6_52c6],
    [0x401a_4084_b0f5_3485, 0xb9c5_0007_4624_4d2e, 0x7335_3ce7_d855_0065,
     0x3d9a_4c72_536f_d28f, 0xbd41_5dc7_743d_1a9c, 0xebea_c196_3abc_d6be],
    [0x3ed0_03d7_4adc_2cf3, 0x15c5_20f6_0a29_1d95, 0x5a95_3444_0763_9018,
     0x2996_c63b_e5d4_d908, 0x916f_c192_10e6_b286, 0x9412_8d59_a765_c785],
    [0x0d33_a642_3a2c_a0d2, 0x748c_ef7c_f523_c571, 0x1159_e992_ca34_169a,
     0x89e1_69b4_53f6_d2a1, 0xf873_438e_ecd3_66ae, 0xa25b_bcc3_abeb_2434],
    [0x4261_8943_4081_4f6b, 0x3c4b_4a81_711f_50be, 0xd0c8_60af_93b9_420d,
     0x20b4_fcbb_2e74_02bc, 0xa613_bb36_d880_e8b5, 0x76bb_31e2_ba78_8d99],
    [0x6393_63fa_40e5_3cd8, 0xe1b1_7563_0c11_df2f, 0x2feb_c29d_14d2_399c,
     0xd292_b927_4550_2b99, 0x9bb5_6f77_0a39_e529, 0xba1a_7927_b29b_8166],
    [0xac09_0c86_58c0_a121, 0x1ea6_090d_930c_19a0, 0x97db_ab25_d464_956f,
     0x6ae6_3a32_6978_6ccc, 0x89b5_4303_0804_3f68, 0x171d_792c_c6bb_b11b],
    [0x664c_7bc9_8273_2fdb, 0x5ac7_5069_ab3f_2028, 0x8234_6b94_5264_bd14,
     0xef01_4e9e_4025_f1e5, 0x6f06_4507_9dd7_665c, 0xbc5b_2706_ac1f_cd0f],
    [0xe6f1_2184_4d18_a3f8, 0xb6e1_178b_8632_26cd, 0x9d4d_d2a7_c6f7_e803,
     0xfbaf_cb69_0be7_725e, 0x5dd6_8673_cdcd_670e, 0xb536_445e_7bf0_bb78],
    [0x3170_db48_f8e5_2419, 0x90ef_7ae1_8163_3410, 0x66db_3f78_9d31_4d42,
     0x6dd8_fcd4_1b03_d852, 0xa5b1_263f_d890_1502, 0x04b3_481a_f582_03eb],
    [0xd2ec_1a55_4721_3c98, 0x14a1_3bdd_017b_1ee9, 0xafad_a55a_fb32_f2e8,
     0x8970_6761_c174_587f, 0x2d78_4c00_0f84_c7da, 0xe8ea_7078_982f_b288],
    [0x994b_00c7_5d9f_1956, 0x0377_4aa1_64a0_47a5, 0x1a9c_c89f_b9a0_bb72,
     0xe3f8_8a73_f2a5_8104, 0xe52b_66be_4310_d70c, 0x27ce_615e_8fae_5de0],
    [0xc3d4_a291_f8b3_b3cd, 0x2af2_cf29_ddfa_40b8, 0x2f9a_aa1f_4b6a_b0b2,
     0x2fb5_843a_d45e_e053, 0xb14d_b852_fa81_6858, 0x8799_9807_1be4_83f0],
    [0xc83e_2066_08ad_2d54, 0xdea2_bbb3_7812_32b6, 0x3ed6_7126_0b44_8844,
     0xb8a7_3d00_1273_cd55, 0x7a89_89cd_c339_8af3, 0x248e_565f_ad43_6886],
    [0xfb03_eb2f_c1e4_78eb, 0x3dd7_9817_d0c1_5eb1, 0x8c07_461c_ce15_d1d7,
     0x9be7_c498_91b7_ca3b, 0x25ad_2437_e9e5_d4cd, 0x661e_9916_095b_7d6c],
    [0x57b0_2982_a1a4_bd74, 0x9ceb_65d9_56c9_a021, 0xc21a_8f31_ec09_b134,
     0x11dd_7e72_3dd7_0182, 0xba0e_a7c0_2d3f_a5dc, 0x32ae_f95b_5f19_9554],
    [0xfd6d_3a6f_7d75_6654, 0x7f40_2c41_efd3_2c53, 0xdbe1_2c3d_8af6_3d69,
     0x92e4_672b_03ae_3500, 0xbebf_0be7_9a87_bcc1, 0xe0d0_c845_1b76_9362],
    [0xfa40_7554_4244_47c4, 0x3827_6eb9_dc78_ffca, 0xdc03_0b40_e392_a111,
     0x8e73_29b7_33bf_7986, 0xb8cd_20ba_feb0_81dc, 0x7f2f_e440_a604_c24f],
    [0xc467_6a56_98ac_5be1, 0xd96c_0d04_ce7e_00e3, 0x8b5a_f70a_44a3_5d2d,
     0x1af8_1796_fe37_6360, 0x1922_2827_b6e9_4686, 0xd083_3bba_a728_c2e0],
    [0x205d_b556_20e4_7932, 0x3dbc_f948_0473_b896, 0x5396_a9b3_e95b_f1f4,
     0x84a1_8e3f_c1ab_5c51, 0x1b0f_af9f_ad89_5128, 0xe677_6aec_62e1_bfef],
    [0x5977_31c0_cfd0_977d, 0x68e5_a99b_3307_d464, 0xcb1a_59ca_0874_d1e1,
     0x7f91_e660_83bd_27b9, 0x1004_bcf2_2a30_7507, 0xc473_fa32_c0eb_e146],
    [0x8f2d_73f1_5238_2ca0, 0x36db_3631_484f_cba2, 0xab8e_7dac_5853_4b85,
     0xc9dc_83f6_4bdc_acf0, 0xe18a_86d5_a404_ec7a, 0xf74c_8002_cbcc_ae7e],
    [0xabb3_e7c9_85b1_4838, 0x1e52_6991_b02e_100c, 0xb603_3376_5f30_2ef1,
     0x8202_7211_096a_8028, 0xdb5f_b63c_32df_b78a, 0xedc9_0e36_aa68_d244],
    [0xdbf8_824c_e804_fc56, 0x833e_3ccd_df05_09a9, 0xc612_931d_08b2_eb27,
     0xe8c1_e576_400e_5739, 0x4046_e16c_0e41_b9a9, 0xd52a_44e6_31e4_4b2f],
    [0x7bf7_02a8_863f_41aa, 0x441c_1315_ea08_d9b7, 0x175b_695f_c295_287b,
     0xffc4_a702_1dc5_7ce7, 0xae0f_2e10_5c0d_35a5, 0x8466_c9c2_2121_d0c3],
    [0xa6c8_2b7a_5762_339c, 0xc3fd_8bdb_e6a6_d1f3, 0x98e3_7e76_cf05_1b41,
     0xfca1_4432_54d3_9fa0, 0xd182_0d3c_2089_fb12, 0xa629_7940_114d_0e2b],
    [0x91a8_e88f_5b26_9b84, 0x5ce5_bd13_b839_f915, 0x71d3_badf_5907_93f9,
     0x61a5_799a_1f2f_635c, 0xcb6e_8ee7_0e0c_fcbe, 0x7a51_8532_dccc_48e1],
    [0xed61_59c4_38d8_acce, 0xbd2d_47b3_52ff_f864, 0x00e3_fe4d_ebd8_b0f3,
     0xc848_8d49_055f_ae39, 0x082b_ca7e_3465_7650, 0x2cef_272e_fb4f_23c1],
    [0x02a9_baec_8aaa_2950, 0x04c3_089c_cf6a_42da, 0x56bb_1005_abae_17b1,
     0xdf89_b6eb_4b37_df67, 0xc645_e8d7_b029_0bab, 0xbafe_2d33_5b9b_504f],
    [0x9864_724e_c1ac_9c32, 0xd037_fe97_ee4e_6504, 0xb0ce_6a57_8619_dcf1,
     0x2fa0_89f5_9ed4_51a9, 0x11a7_d846_ba8f_897d, 0xb0dc_4bbc_6826_9d1d],
    [0x47b3_6255_297b_7bec, 0x3db2_26cd_2b45_7ea1, 0xbbda_45cd_1b95_3901,
     0x24e5_c510_db98_c91a, 0xfa5e_4e87_9ef3_1b7e, 0xa221_2d3b_7383_79d9],
    [0x3afb_0f15_d9c2_4d59, 0x45e3_3e5a_843c_691e, 0x5958_cfbf_bf6f_fd65,
     0xabfa_1350_03dc_8135, 0x3abe_384d_f795_707e, 0x8e9b_b4f2_2157_82df],
    [0x745d_cee8_f800_4b47, 0x93bc_6687_0ad2_cda4, 0xf2a0_73fe_1726_5071,
     0x512d_ebc3_e3f7_4a5b, 0xfd1c_4f58_ba4f_426a, 0x2202_bc54_e90c_844b],
    [0x484c_e432_ef1c_5151, 0x18ea_d594_a450_5900, 0xa48f_57dd_8898_1d6e,
     0x459e_102a_4516_b809, 0xf97e_c9a0_1788_a21b, 0xbca3_56c2_5a53_7d9e],
    [0x3efd_6817_7c15_7d7f, 0x425f_4515_1a7c_1ba3, 0x162e_8946_ea69_ac73,
     0xa0b5_3df0_0331_1a8b, 0x5c61_f6f3_d0bf_a1f2, 0xed92_3da5_d3c1_aceb],
    [0x7c50_e2de_ecfe_9dc6, 0x17f8_0996_50da_08d7, 0xc87b_caaa_9407_03d4,
     0xab80_498f_cbec_19ed, 0x7895_0edf_9ff2_03d9, 0xadbb_c8af_1f48_039e],
    [0x0849_6491_e4f2_b575, 0x066d_1ed2_a0ac_a263, 0xba61_b5bd_c394_dc8f,
     0xe433_6312_e97f_1e50, 0x3479_bb15_d217_ca47, 0x9012_eb13_f695_cdf7],
    [0xdcbc_43cb_441b_fa6b, 0xd9c1_1082_52e9_b959, 0x660d_0087_622d_1089,
     0x26e3_5e54_c71a_3192, 0xae95_deec_1a50_5722, 0xb61f_5182_cf90_3e42],
    [0xaa03_f757_6420_4ead, 0x7690_95c5_1e86_7443, 0xedf6_6399_ea6d_0b73,
     0xc73b_6cde_5431_cc14, 0x5ccc_d864_790a_3340, 0x165e_e303_cf64_e397],
    [0xe5a3_f256_c577_c042, 0x5b41_300e_3827_a9b4, 0xe80f_8a8e_fc5c_ad04,
     0xff78_66b9_b15e_9429, 0xc1bc_ea40_f268_41e2, 0x5be4_ff4a_bc25_a3da],
    [0xc932_fb41_9d30_4c04, 0x6275_5649_7691_f88a, 0x149d_21e8_615c_5a62,
     0x6a53_07b2_e54f_f029, 0x1cbe_87cb_d3f4_0139, 0x867c_8331_1118_50a0],
    [0x9470_924d_82a4_90a0, 0x6f75_446e_246c_7283, 0xbc49_11f9_3a9c_f101,
     0xd15e_5cc0_8522_a4bc, 0x9119_6dd9_5c4a_30af, 0xa0bb_0d4f_88e7_8fb7],
    [0xc9da_7ce1_6d82_d128, 0x07ca_96b9_7bfd_7d15, 0xd63f_a64a_4b19_c926,
     0xd128_1837_870b_10c7, 0xb1e3_6b87_ee2f_e287, 0x634f_2c0d_a84a_b3ba],
    [0xd872_acf3_f9cb_f460, 0x1475_7fdd_5576_2bbd, 0x2ba5_6af0_60a4_b36c,
     0xd293_899c_1281_7b8e, 0xe4d2_75e5_38c0_60b3, 0xd84d_47df_3c4d_b097],
    [0x5d4c_3ddd_50a2_ec7d, 0x44b4_a410_efb0_aafb, 0x3e06_49ff_d5bd_29ca,
     0xa1da_cce1_ddad_8b20, 0x09be_5954_f50d_ce81, 0x082d_39af_c260_384c],
    [0x637a_a6d9_a7a2_7b94, 0x09ba_b935_8474_15ec, 0x7188_3d0e_e0d7_8920,
     0x4095_cb4d_44b5_a0bb, 0xc4e1_832f_d93e_1de3, 0x2d1e_07c9_d27d_d252],
    [0x788f_fe15_e2cb_720c, 0xa2f1_8380_e98a_68f7, 0x888e_d12a_39e1_b45b,
     0x2147_eb5a_afd2_bbd3, 0x8a23_66c7_a15a_3999, 0x95db_871a_a96e_e06e],
    [0x5fb1_95c8_5f2f_2470, 0xb142_421d_cb5c_e256, 0x2d3e_6238_594f_f595,
     0x6de0_791f_a437_42bf, 0x447f_564c_389d_3217, 0x421d_5fcb_76e7_47c8],
    [0x5a9b_dc54_9c36_b14e, 0xc84c_e5e5_028e_bd48, 0x884d_5068_1d73_904d,
     0xa7a2_2c92_4c94_b45e, 0x9582_ca47_80a3_9426, 0x2e04_fadf_da58_ca5e],
    [0xf0eb_5499_e595_ae44, 0xaf98_790c_be0f_0b11, 0x2553_5bec_a509_38b7,
     0x9197_5a7f_08bd_bb48, 0xd6b2_4859_b68e_14dc, 0x827e_3214_b9ba_aeaa],
    [0xf3cb_a840_1657_547e, 0x2d88_8c5b_6c28_cd49, 0x7fd2_f22a_39ae_6c79,
     0xd143_ccb4_5b06_6c33, 0x98a5_b0e7_bd95_2a16, 0xd6b1_535e_fe28_311d],
    [0x82af_42b6_59f6_429b, 0x2d2c_6e76_8fd2_315d, 0x1d3c_0b6d_4d75_c6b1,
     0x6abd_0e26_0a0b_bedd, 0x86fb_2558_990a_819a, 0xbf9d_7759_cfc8_49c4],
    [0xf916_c098_3358_ac5c, 0x4927_90e5_c9b7_c3dc, 0xd4ca_b0ef_1da5_45d4,
     0xb2f9_f3bc_2535_e812, 0xc853_5d33_b2af_a578, 0xd46c_ac71_9ec3_9f01],
    [0x9aa4_fe69_90b7_bf05, 0x97d6_52f0_900f_f0e8, 0xe5d1_d944_de2e_692a,
     0x0a38_aa2f_b3a6_379b, 0xdb39_1d65_146d_58b6, 0x75b6_7269_8306_6d12],
    [0xf7e7_84f5_5b12_6999, 0xf5b7_e58d_24a3_da95, 0xb698_1236_c66d_0f52,
     0x0d44_b10c_88e7_36a1, 0x060a_25ed_fab4_5a76, 0x3cca_e89f_f2d8_8be7],
    [0xcbc4_b3ee_83e3_56ff, 0x3783_369d_e63e_b7d4, 0x6a31_0dde_aec3_396f,
     0x814d_399e_294e_c44c, 0x4b41_7b42_926e_855f, 0xa61b_fbff_8fcc_59f2],
    [0x0e0a_7d90_e684_4dc9, 0xc870_e60d_5dfb_6783, 0x63e9_0f52_bd26_2ded,
     0xd2a2_0de1_a685_d4d8, 0xc307_ac66_2842_5eb3, 0xa4b2_d411_f620_7d65],
    [0xa795_a18d_c574_f004, 0xc420_9a36_6244_c78a, 0x8edc_e1c5_273a_f12a,
     0xdd84_593e_08f7_4270, 0xb6ab_7bfb_2953_0513, 0x6bd7_8492_0655_2a47],
    [0xe49f_a24f_e6fd_4577, 0xc637_dff8_968f_5d9e, 0x1367_7e14_c51a_130c,
     0xd17d_ab9d_96fa_8853, 0x0c06_08e1_185d_42de, 0x33fb_3283_04ca_93cc],
    [0x8da0_961b_2967_5077, 0x7e47_e2c2_60b3_50b6, 0xeb3f_f461_d163_e926,
     0xd6f7_4867_5a8c_ff3a, 0x1887_d161_919f_65e6, 0x8163_3132_f35c_d84f],
    [0xaa99_8856_6f29_f8c4, 0x8cc5_5c13_e5ce_1e80, 0x603a_6f04_724d_3822,
     0x7470_ff2b_8e81_c26c, 0x8831_ac0c_9bc2_fcbe, 0xb065_fb97_0e73_0227],
    [0xd27a_7737_e059_c046, 0x27e5_b10c_9bdc_e6a6, 0x735f_8256_5d36_c77f,
     0x8e6b_4a4f_545c_0b0d, 0x0bd2_acf5_f8a1_a584, 0xe4b7_a499_dafb_4a33],
    [0x2013_c265_4e67_a3a2, 0x3a77_8a90_f694_3c18, 0x03fe_a3fa_a028_2189,
     0x1808_a150_645e_1dd3, 0xed9d_f150_05a9_d48a, 0xa05a_65f7_ba56_2a25],
    [0x16c7_8b90_f574_b969, 0xaaa5_4454_b183_75b0, 0xb32f_6b43_2283_644d,
     0x72e5_06cb_0f3a_ddad, 0x3f25_cfac_fc30_c0ed, 0x594f_225d_7764_1b52],
    [0x3d8a_338e_34e0_a73c, 0xfb29_91b5_e7a9_5529, 0x93bc_4f7e_c0aa_813e,
     0xfc72_73c5_cb0d_d2d8, 0x6fd8_aafe_b3e8_71dc, 0x1588_4fb7_e22b_8d96],
    [0xebcd_4f36_bb1f_a30b, 0xda65_12fb_c79c_fa88, 0x290d_b13c_9c2f_8b8a,
     0x4397_de0d_71e9_1181, 0x92c7_2ac6_0f0e_a0e8, 0x6bd5_3e93_fb21_b325],
    [0x01a7_e269_ea27_fc44, 0xb9ee_9a6d_27e2_ce14, 0x9ce5_39b0_f44d_c8ec,
     0x9376_0b66_a391_2048, 0x8940_a4de_6514_22c7, 0x4793_25e2_376a_bc43],
    [0xb978_d1af_3ee8_70ad, 0x1a10_2039_bcc2_bfb4, 0xfe26_e467_f82f_b5a7,
     0x7aa2_aae7_8a37_1518, 0xa6c0_4998_0efe_030c, 0xce5b_165a_31b9_cf55],
    [0xe079_a70e_fa5e_7bf3, 0x5912_15f8_01cc_7032, 0xc6eb_4852_3141_6a2e,
     0x7901_5550_313d_f7b4, 0x6dbe_e87a_70c6_9171, 0xb3a9_223b_8fad_9830],
    [0x1e65_c524_6bf3_2c0a, 0x746f_7188_7112_ac88, 0x3768_ee0d_1e4c_803a,
     0x1328_5a92_17d9_472a, 0x50d3_653e_c5b9_2fda, 0xd3d0_8125_121c_1b16],
    [0xb266_58b8_a7d7_c6e0, 0x98ba_bab8_f6a7_5826, 0x0c5c_dc5b_7c57_1e2f,
     0xa075_7c35_e27c_3c15, 0x5a4c_a5ec_989f_5323, 0x1204_0917_d135_3181],
    [0x283c_3f5d_1d0f_20ce, 0x35ef_fef7_a76e_80fa, 0xc284_c26f_b60a_607b,
     0xf45c_4197_3151_d4ab, 0xdf04_49df_c681_e6a4, 0x9f4e_9231_44be_2940],
    [0xa37e_ba83_48c5_6b09, 0x1ba4_a5af_2150_a1bb, 0x8538_e2ec_a186_5e02,
     0xec70_c5f0_94e6_b54f, 0x2853_2f0e_3e2f_1ccc, 0x6aa4_81ab_8c52_2467],
    [0xcb6b_cbcc_64f4_74ec, 0xb06a_c92d_a299_c98e, 0x6703_aad7_d1ef_4018,
     0xf674_c9c0_7943_bfe2, 0xf39a_f9b9_62d6_9a7b, 0x2c56_3c88_d9fa_4631],
    [0x919f_ef03_eb6a_cf89, 0x6c7e_22da_8609_dbe3, 0x1fa1_e2e6_b8df_ad9e,
     0xab95_cc35_84e7_6cce, 0x1d04_daa8_c2b3_fe15, 0x1d43_007a_1f9f_889a],
    [0xe781_8e57_8908_1774, 0xc070_4429_af65_9e0e, 0xa373_caec_b9d9_966d,
     0x09b1_5bfb_604e_f493, 0x3741_6d1c_8d30_d8eb, 0x14e7_9c0c_c95b_b0c1],
    [0x524f_475f_142a_020b, 0x1c64_51ba_2e4b_af9a, 0x9b53_9d99_4a1a_af6e,
     0xf427_5fe4_2f97_d113, 0xc427_c07d_61e7_09c3, 0x24cc_df22_2ff9_15b2],
    [0x14de_747f_8d16_69b8, 0x4e0e_531b_85d6_2d43, 0x78e2_a7d7_1ba2_e18d,
     0x1d94_6b89_b143_3fbf, 0x00e3_87ed_73f8_9378, 0x5299_2a82_83a8_32c6],
    [0xcbdb_69fb_cb21_009d, 0x0ec6_fdec_4e82_69ea, 0x79d9_08aa_89fe_d13f,
     0x7548_e553_a110_3ef0, 0xbbe4_048a_115e_c944, 0xe1c6_0ebf_7fbd_dfd1],
    [0x2452_2aa6_ec21_9fb7, 0x78c9_52e8_a5de_ddda, 0x2822_f9ef_9792_9df0,
     0xa70c_9d1d_8258_b682, 0x8b37_ac64_6d34_1e93, 0xd67c_34ff_4bbd_5e0e],
    [0xe770_cd22_fabc_425a, 0x7e9c_34d3_acc5_075c, 0x0aff_a78c_7bc7_6623,
     0x4eed_9851_852c_03f2, 0x7203_ec6e_e604_26fe, 0x6517_cfb8_5022_dc4e],
    [0x1581_f896_50f9_97a1, 0xdb9c_e979_f407_d39e, 0x0ad4_800e_3934_7f3f,
     0xc0c3_5b8d_9fd1_392f, 0xe74d_894a_6167_ae43, 0xd462_e2f4_e3ca_9ac1],
    [0x05ea_545c_5b41_c787, 0xcecd_2dc5_6104_c690, 0x7337_c074_6cc9_63cb,
     0xfdf0_8b81_f136_b8b1, 0x7f7a_8621_59c7_2990, 0x0ad9_111b_6cb0_ed2e],
    [0x6fe5_7803_2a92_0367, 0x49ef_aee5_5c83_2164, 0xb315_7997_365a_ef57,
     0x98f8_4917_c903_c67b, 0x75cf_75da_2aa6_7bf3, 0xd2cd_8ab6_9e83_d8a4],
    [0x65b9_9eb5_c4e3_35a0, 0x486a_7592_2725_5280, 0x4f7a_3b55_8f86_eac0,
     0x03df_89cc_2686_dbf0, 0xa956_9316_4eea_a311, 0xd314_9307_ef5b_db09],
    [0x6532_61b5_2952_7041, 0x9a55_9eca_9a78_9241, 0x5931_ff0e_09e8_677a,
     0xf6d5_3afd_f414_58ec, 0x02b9_4442_e96b_f81e, 0x5c4a_1b46_1fa9_5c7d],
    [0xb6fa_3db3_f309_6a56, 0xad1e_6783_69f1_41a0, 0x8170_8da9_ed5e_5188,
     0xe2ee_29d3_37a8_1ded, 0xd7ec_74f0_ac9b_37c0, 0x1b78_5a6f_a3c7_6037],
    [0xae15_3d61_8202_ed33, 0xe8e9_1115_185e_46dd, 0x05d9_ba34_3643_72bc,
     0x672e_e162_9bdb_e13d, 0xfc2f_5ea8_624a_61cb, 0xd843_198b_e392_5035],
    [0xbce8_f7c1_fc13_0582, 0xa571_aebd_c5c5_b472, 0x7f08_c705_8391_1e9c,
     0xf4bc_16ea_95a9_d958, 0xa9ee_3d6b_ddea_2c72, 0x1b65_1b74_994d_f683],
    [0x13a7_d9da_16ea_461d, 0x7fcf_04fc_4edc_32b1, 0x6660_7c39_1385_82f8,
     0x8831_546e_ad73_a091, 0xd8a4_c4f3_49d1_f5fd, 0x4975_c9d5_7016_38db],
    [0xbf0a_a6a4_1f0e_c78f, 0xdc2b_f64f_4902_26f3, 0xcda3_13aa_f2d0_3538,
     0x04b8_da44_6059_5a63, 0xa23f_1b72_9bb7_63ba, 0xf793_736a_73f7_7272],
    [0x3ba3_34ae_bfdf_6e3a, 0x2120_37ea_f6a1_e5b2, 0x004b_3c19_20bf_41e0,
     0xd8a1_1b5b_a862_706a, 0x6579_e502_7315_f8ab, 0x3c1f_9cbb_6d54_e13d],
    [0xbe24_de02_bda2_a2d7, 0x4d69_a648_e027_e9de, 0xfebc_2a53_73bd_90c5,
     0x42c7_ac0e_55a4_14db, 0xd659_62b7_2165_9edc, 0x5383_1b2e_73fb_0d23],
    [0x3de6_8c3d_9408_0e94, 0x1d9e_0bc8_68e0_87dc, 0xe7ad_1ef1_4270_b35c,
     0x9a14_cf37_3e0f_67e5, 0x00ef_98ab_e6b7_e600, 0x8235_3f1f_1823_4eaa],
    [0x6034_549e_932c_f51c, 0x3ce2_e36e_3eb4_d407, 0x9fba_80ca_22b3_1e3f,
     0x142e_aeac_8cad_93f8, 0x5d3d_5ca6_e590_9cf2, 0x1b2c_70b4_82b6_25b5],
    [0xbc21_2277_fe45_1938, 0xe216_37ef_3a3e_f4da, 0xc39c_70d1_55ce_7ad5,
     0x5c3e_dc78_491f_3af8, 0x1a40_5c9b_847d_16df, 0x0f44_6b05_6e29_1875],
    [0x69d7_91c7_58b8_e1dc, 0x49d8_a845_12b8_b0ca, 0x2474_f7b0_5e06_1dbc,
     0xa79c_97ff_b149_3f6d, 0x6fb9_e77b_764a_9772, 0x3115_9361_4cb6_d8fe],
    [0xf67f_8d77_d5a4_5e27, 0x17a3_287f_58d2_6572, 0x1827_92e5_95e5_2080,
     0x7d15_b705_2c37_3a90, 0x536c_f297_6b91_0733, 0xf0e4_83b4_3acb_d504],
    [0x9f1e_e351_d08e_27ee, 0x7615_8f01_0125_1c50, 0xc126_9fd2_2fde_67fa,
     0x6c19_30a2_6e6f_3f5e, 0xa32a_a0aa_a396_b071, 0x497a_5994_1693_8bd9],
    [0x5699_16f0_8e7d_1767, 0xab20_f046_f165_c725, 0xbd4c_1caf_c3de_32da,
     0xcf19_f61c_ca27_4cdf, 0x4deb_bdc9_0446_f779, 0x0d07_522e_0742_9b0e],
    [0xb0f2_95fb_72f3_921f, 0xc692_dfa7_9fad_80ee, 0x6901_1629_e023_8da6,
     0x0046_af22_910a_ee2c, 0x77de_bb94_c94a_9dbd, 0x4b40_1110_ee8a_03a8],
    [0xff6d_2fca_08d6_9f8b, 0x9759_2af1_712a_5acf, 0x9d54_0af1_03bb_0ca6,
     0xd559_33e5_7232_8f10, 0xec72_18ca_2fb0_f7a7, 0x8d15_4ece_5831_52ad],
    [0x6cef_b6a3_bbb1_8efa, 0xe47a_0437_ad48_bb5d, 0xac96_95d3_8ceb_73b4,
     0x4e54_68b6_ceb0_6906, 0x3a57_007b_43f1_591f, 0x16ed_f10e_d21c_2651],
    [0x3012_a14c_aee9_2a6b, 0xc7ce_2d0a_1639_7b6e, 0xb2ce_1d67_6cdd_36b6,
     0xf563_f968_3f8c_3e45, 0x3c11_2343_ee73_9443, 0xd2fd_3638_0c31_457b],
    [0x1082_d7ed_e79c_89e8, 0x57d1_c088_d807_c597, 0x9e5c_e9cc_c772_f2af,
     0xd30a_d1ca_f61b_b8d9, 0x1e40_d024_a693_9ca4, 0x4985_dbeb_358d_f104],
    [0x616e_bf3f_c09b_c5e4, 0xa949_c7da_50b3_67ed, 0x0c28_9ef8_af79_cdb9,
     0x5c23_303a_5f39_6469, 0x3316_727f_556a_9db8, 0xb7cc_ec94_3229_c3fc],
    [0xb9b4_b8c0_4d46_5eae, 0xed44_836d_54aa_7798, 0xa6f7_dc5f_0ff5_918e,
     0x700d_d1c0_f68e_4e23, 0x4bf2_faa0_5162_22ac, 0x3c2a_e260_0234_8642],
    [0x8a7e_ce87_8b79_532a, 0x2361_3836_116b_497d, 0xfe66_5e98_04c1_0ac7,
     0x45e6_b949_601d_50db, 0x5b2a_9e48_87f1_ae92, 0x447f_f94b_a4ff_2079],
    [0xe31c_ed1b_1f58_8060, 0xe60a_18ce_70d5_1be7, 0x62c0_8a1e_01a2_e1f3,
     0x008e_b3d6_87ea_e77c, 0x1d01_a7f2_5413_4224, 0x7e00_7be7_6e56_f3a0],
    [0xe319_9529_9e1d_8c4b, 0xd1fb_e650_613b_cd97, 0x1d3c_3f36_a806_c06d,
     0x49f2_78c3_d9f4_a9c6, 0x0eac_518e_5fea_0b19, 0x7d37_a390_c9a0_6eda],
    [0xe38f_2a3e_d827_813e, 0xc5cd_4c09_d275_547e, 0x1cf0_e831_3f2a_bed6,
     0x9ecf_e847_eccf_6c5e, 0x60e6_8184_c974_253d, 0xed6a_b763_6cdd_66f8],
    [0xb6c9_dc4e_954d_ec83, 0x337a_86d4_3c1e_137b, 0x611a_5cec_fd4f_d4f2,
     0x4fab_e0c6_259f_490a, 0x2743_9311_7710_fef9, 0xf80a_64ff_de29_b591],
    [0xcab9_95b4_4783_8136, 0xf8ba_ee20_d669_98c9, 0x037f_8691_364d_2b07,
     0xf711_fe82_4949_f810, 0x0d1b_4e27_73b4_e944, 0xfaba_24fe_c54f_5e29],
    [0x308c_0b29_7496_8fce, 0x305c_e82b_64fd_e7fa, 0xcbb9_57fa_7ac7_9c07,
     0x938b_b169_9d7c_5fb1, 0x4dfc_5fd6_52b4_d859, 0xc76d_7fc2_1d9a_b354],
    [0x213f_9d2a_deb6_b2b9, 0x0a50_1ade_808b_a7e6, 0xe1f1_a9f9_ad58_121d,
     0xe1da_4ce9_e3d3_0307, 0x4f8f_f0ee_bd51_c22e, 0x5eaf_5d79_c0c9_02f0],
    [0x66d8_6b94_86fa_29fd, 0xac59_fac3_57c6_881b, 0x6bc5_5595_a36e_36a6,
     0x162b_f06d_3151_03ec, 0x126c_f6aa_5e1f_26f7, 0x9df0_80c4_9cca_232a],
    [0x26a2_dbca_3c8d_42fe, 0xa09d_cb40_fb74_6b29, 0xcb00_7706_b3e9_b9b7,
     0xabce_2485_27c8_7837, 0x825e_3df5_d74b_619e, 0xf2d7_fc9d_9cb5_8c30],
    [0x5ca5_46ba_2114_1be3, 0x4588_716b_d734_aa98, 0x4aee_e69a_af4d_57a5,
     0xe01e_d8cb_d87f_4734, 0x243a_a59d_601a_4fb6, 0x3eac_c74d_bbe7_e0f5],
    [0x123d_cc7d_18d3_7e12, 0xa9d7_bd9b_5984_9e03, 0x8944_a203_a613_c897,
     0x1761_2271_ee2e_c452, 0xcfc1_1c23_3e5f_2219, 0xf0a4_7de1_b0f8_fdf0],
    [0x4d84_263b_e858_28ac, 0xc457_68f3_0f73_93cf, 0x0d4c_c4c0_f7f8_0a70,
     0x0178_80dd_8469_65fe, 0xc3bc_9f2d_bbe6_8dcc, 0xc236_c7e2_47aa_3536],
    [0x8eb4_e4b8_b7da_54c3, 0xfa14_27a6_d138_9409, 0x7444_49ab_8b19_f0b9,
     0x6bfb_e32b_2d0b_db94, 0x9131_3eb6_e06c_4ff5, 0x0170_a64f_e878_578d],
    [0x179e_05c1_7e36_94f5, 0x3159_9dae_a9e7_2f8b, 0x0287_04b1_3520_27f3,
     0xdab6_f497_5b6e_f09a, 0x5e3e_730a_bc6e_8fe7, 0x4175_3647_4147_63d1],
    [0xddba_4f2d_0434_b98a, 0x0fba_c522_f3da_eaac, 0xd315_aed4_bb31_715e,
     0x5c1f_3d78_ef9e_5425, 0xb8dd_542d_8bf6_37eb, 0x5fa8_a2ee_e095_ce1c],
    [0x8751_9c3b_117e_df1a, 0xf7c4_6992_4b30_6e46, 0xd2c8_59d5_6ee9_3fd6,
     0x7e43_975d_b428_44fb, 0xb6ec_e5ff_0483_394e, 0x02d6_2595_e91e_3398],
    [0x3268_1211_1fd4_c7bc, 0x0995_44a2_c2d8_1a7d, 0xb429_bb12_acee_cf49,
     0xf916_080c_aad1_5fc8, 0xe814_be19_0473_e0c0, 0x8245_a66c_5fa6_f410],
    [0x7c28_f51d_3318_1d06, 0xc2e1_bfac_d6f2_25fd, 0x6d74_7737_3fb0_58ca,
     0x2731_20a4_acba_0fb4, 0xe740_e221_90bc_3f2f, 0xebf7_f507_6575_8830],
    [0xa9d4_bb66_5c15_1eb1, 0xc6a1_ea32_577f_1b57, 0xf12a_0091_bbd1_c87a,
     0x52ed_eb26_6d0d_06a5, 0x6682_4579_22d3_8306, 0x9e20_8003_ac81_ffe1],
    [0x8845_6dff_8fcc_14ee, 0xb7dc_6813_f9d1_6338, 0x774c_779b_6719_cd40,
     0x421e_ad66_567c_b6ce, 0xef04_e66f_4fb1_7361, 0x708c_07f9_95b8_ee67],
    [0xfd51_6c06_5215_660a, 0xbc97_fc5e_0f7c_426d, 0x3d72_e2da_b55c_e389,
     0x48bb_9792_4b72_89fd, 0x01db_c347_6578_fda5, 0x5464_b449_2514_6d56],
    [0x12b4_5f28_fe73_4036, 0x2bab_852d_174b_4c3c, 0xf0d3_f5f0_a0d1_2afa,
     0x3e09_ce8f_c0f8_8fb1, 0xba2b_e405_cf69_0227, 0x3100_cdad_ad5e_9bac],
    [0x43c5_db2c_16cb_f0f3, 0x4158_f77b_00af_1683, 0x048f_4888_d0ae_4b4a,
     0x36ad_98f8_1535_1e5f, 0xc7d6_309c_af1f_7a02, 0x4efc_524d_45b4_f6c4],
    [0x254f_60e0_a929_d2c3, 0xaeaa_e6b4_c271_d87f, 0xd0dc_0c71_3aa2_02aa,
     0xd750_04da_b803_027e, 0x822f_fe90_f2bd_f421, 0x9998_ff9d_9599_be72],
    [0xf4f2_6f3d_3daa_4018, 0x63a3_cc47_33cf_eb16, 0x5962_09eb_60ae_0bdd,
     0x43bc_b7f9_f0d8_63e7, 0x6505_d095_1f74_7f58, 0x9a34_d71f_7a10_2d47],
    [0x6a06_660a_549a_ba78, 0x263e_f108_1353_b190, 0x0967_3523_4ba5_7b0d,
     0x1d4e_1202_93ce_8cc0, 0x4e4a_3cd8_2a70_7c44, 0x6990_27ee_0037_2934],
    [0x0e0d_83fc_e670_dbda, 0x9f04_d71d_37df_79de, 0x9443_d350_3544_6607,
     0x101f_b87d_ce88_8457, 0x627b_f792_2405_7c18, 0xdc40_00fd_953f_cccb],
    [0xff69_01d6_c9ff_e0a5, 0x2cda_addf_05df_6def, 0x98da_f476_d3eb_bbde,
     0x92d3_7135_ce42_c5b2, 0x4518_7d72_cb51_905e, 0x9b34_c328_ac44_5e42],
    [0x593b_4f22_1871_a532, 0x5b58_eec7_3e4a_07d9, 0x14a3_579b_5159_3ba6,
     0x2d7c_1d6a_b986_36fb, 0x9b51_f3c6_582d_4171, 0x482b_e23e_c7fb_bf93],
    [0xcf88_aa1d_3e0f_c932, 0x2118_f037_989b_0264, 0xb37d_ac83_c4ad_9e9c,
     0xacde_94cc_47aa_2baa, 0x1188_39c2_6bcd_83cd, 0x32b5_843a_3193_c9db],
    [0x2736_94eb_f59c_4c26, 0x43e8_6ede_e50d_48c2, 0x67f9_7093_ed64_3cdb,
     0xa4af_5201_d787_afce, 0x88e8_9f32_43ac_55fa, 0x48ca_4cca_8497_5e2f],
    [0x07f2_3d37_90d9_9634, 0x5352_170c_0997_3e9e, 0x4ff7_ebef_d208_181f,
     0x5d09_7ed4_8e17_7db8, 0xc832_33d5_4225_edd5, 0xbdb2_981a_360c_76cd],
    [0xbf7b_b735_c21f_63ad, 0xd42a_ecb8_1b9a_c971, 0x4184_2095_5661_9d2b,
     0x56fb_088d_b24a_b737, 0xef45_9017_cc4e_d7cd, 0x6889_4e75_0102_d4f3],
    [0xec30_09e1_1646_864c, 0xabb7_6ebe_2189_96b3, 0xa443_66e4_8b43_3684,
     0x0250_cd9b_5f8f_205b, 0x37f4_0221_7786_6a6a, 0x21dc_8eb4_46bd_99df],
    [0x0ea6_152d_a503_13db, 0x4b18_fcbd_7b7f_2aa2, 0xa520_bd2e_a4d3_4091,
     0x9293_c208_3632_3441, 0xf72f_aa3f_44fc_8b1f, 0x1ae7_a922_0c87_7a87],
    [0xa2f2_e7ec_8ba8_be87, 0x9978_4f38_eac4_2df6, 0xd018_f5fb_1f54_a5de,
     0x8edb_8a12_8f89_a8ea, 0xe9f4_fd01_005f_0a25, 0xf686_5090_f443_a384],
    [0x648d_f102_8e44_b6c8, 0x239a_ae12_588e_a54e, 0xc732_4509_8aec_57b2,
     0x39b6_9938_f8d4_b60e, 0xe98c_cda1_18cc_7f99, 0x6564_349c_25c8_99ad],
    [0xeeba_0719_10ae_8cd7, 0xae13_d4e4_4471_8ceb, 0x5a38_ccea_2711_6ec0,
     0x6626_f950_b944_9503, 0x4d20_be0c_08d9_2a2d, 0xc099_d6e9_9a84_9ddb],
    [0xb96d_f109_572b_1deb, 0xcd4e_fa1e_ef50_3627, 0x2092_c32b_1387_66ae,
     0x5f73_8409_fafc_1ccb, 0x48ce_ef9f_8712_dbd0, 0x4a20_e876_6af8_c679],
    [0x13fa_0d86_7747_6531, 0xf656_0311_fa21_8aff, 0xdd82_9df5_2780_ce19,
     0xa82a_13df_3d99_e4f5, 0x5570_cf89_7b78_44c8, 0xb4e0_ba76_cd6c_ccca],
    [0x5e63_58bd_596d_ca88, 0xc480_a849_97c1_1dc4, 0x44bd_fda1_c416_2793,
     0xea57_5920_3590_81b6, 0xcf40_4dbd_de42_a8b1, 0x6db7_2a06_f75f_e7fc],
    [0x2ffe_4156_076b_8f69, 0xbe08_bd67_3985_db1b, 0x2efb_b123_3871_2477,
     0xc3da_c6ca_86cb_c223, 0x00f0_141d_c65c_1921, 0x694b_5568_16b8_1608],
    [0x590c_ef24_57f2_8b3c, 0x09b6_c561_15ec_28b3, 0x3d38_681e_f0b9_a6b0,
     0x5d6e_e687_f269_e86e, 0x36e0_1fe9_04d7_f496, 0x7a38_4c59_557a_56e7],
    [0x1c06_ec0f_2387_a7f4, 0xa1c4_4158_1ddf_954d, 0x61fa_1425_d4e1_cc47,
     0xba7c_9ca7_8011_98bd, 0x309c_7389_f480_46b8, 0x6cc5_11f3_581f_3a56],
    [0x50f4_9296_d440_c856, 0x972c_daf2_7319_b835, 0x2d35_5d86_2aa6_b78b,
     0xaf1b_c5af_dab3_343a, 0x4b42_1c12_e8ae_0f14, 0x3759_2d95_7f1a_c660],
    [0xa0a4_5ca6_265e_0fd3, 0x4623_cf6a_78e8_cb75, 0xd055_864c_565e_57b7,
     0x9b14_87dc_5803_bf9e, 0xd9b8_5f56_1b55_cb24, 0x4139_e101_4a64_e67f],
    [0x2634_aaba_6377_40c3, 0xeb49_0f3a_dfeb_feca, 0xb968_932f_ddf0_ab43,
     0x4a48_1f40_fcfd_e9b2, 0x4e26_d3f7_2a9c_a725, 0x59b9_0f4c_85a3_389a],
    [0x2d85_9db3_e1c4_f01f, 0xf78d_cb68_25f9_0549, 0x5e63_9d6f_7984_3cbc,
     0x0638_66da_32b0_e564, 0x1dc1_7d70_32f4_6923, 0x64cf_9fd8_f825_a61c],
    [0xd2de_7dba_02dc_8648, 0x7086_0b4e_fe42_3c78, 0x1308_4641_3c80_3bee,
     0x97ef_e51b_d737_0cd7, 0x6772_50c6_3776_f48b, 0xbbd1_bb68_b76a_158d],
    [0x3a9e_e169_77a1_9b3b, 0xf229_be1e_11b2_120e, 0xb5b4_e6e4_43c3_1db1,
     0x3dd0_7f9c_6595_fdbe, 0xb449_8dab_6754_7c34, 0xab43_f4d1_b916_6314],
    [0x08fc_179d_e2dd_e233, 0xbca1_8276_80c6_14ba, 0x2c52_2928_0daf_459c,
     0x1b52_2bc4_ec05_27a7, 0x8412_5c25_bf23_dbcd, 0x7850_d044_113f_83fb],
    [0x1d96_8e3b_41e8_c8bd, 0x52f0_b3c7_7bee_d767, 0xb916_233d_479f_860a,
     0xceeb_3fda_20e4_be56, 0xeb8f_74a2_5af2_8c6b, 0xbfc1_3fa4_b59e_4e49],
];

/// Neighbor selection, indexed by the wrapping round counter. Entry `i` of a
/// row names the state word that gets mixed into word `i`. Every row is a
/// fixed-point-free permutation of `0..=5`, so no word is ever mixed with
/// itself and every word contributes to the next state.
#[rustfmt::skip]
pub const MIX_PERMUTATIONS: [[u8; STATE_SIZE]; 256] = [
    [5, 3, 4, 1, 2, 0], [2, 5, 0, 4, 3, 1], [4, 3, 1, 2, 5, 0], [3, 5, 4, 0, 2, 1],
    [2, 3, 5, 1, 0, 4], [4, 0, 3, 5, 2, 1], [3, 2, 5, 1, 0, 4], [4, 5, 3, 2, 1, 0],
    [3, 4, 1, 5, 0, 2], [1, 2, 4, 0, 5, 3], [5, 4, 3, 1, 0, 2], [4, 2, 1, 5, 3, 0],
    [5, 3, 4, 1, 0, 2], [4, 0, 1, 5, 2, 3], [2, 5, 3, 4, 0, 1], [5, 2, 1, 0, 3, 4],
    [4, 5, 3, 1, 0, 2], [1, 0, 4, 2, 5, 3], [2, 5, 1, 4, 3, 0], [4, 2, 0, 1, 5, 3],
    [1, 3, 5, 2, 0, 4], [4, 0, 1, 5, 3, 2], [1, 5, 4, 2, 0, 3], [3, 4, 5, 0, 1, 2],
    [1, 2, 0, 5, 3, 4], [4, 5, 3, 2, 0, 1], [5, 3, 0, 4, 1, 2], [2, 5, 4, 1, 0, 3],
    [5, 0, 3, 4, 2, 1], [4, 3, 0, 1, 5, 2], [1, 2, 4, 5, 3, 0], [4, 0, 3, 2, 5, 1],
    [2, 3, 0, 5, 1, 4], [3, 4, 1, 0, 5, 2], [5, 0, 3, 1, 2, 4], [4, 3, 0, 2, 5, 1],
    [5, 2, 3, 1, 0, 4], [2, 4, 5, 0, 1, 3], [4, 3, 0, 5, 2, 1], [5, 2, 1, 4, 0, 3],
    [3, 5, 4, 1, 2, 0], [2, 3, 5, 0, 1, 4], [4, 5, 0, 1, 2, 3], [5, 3, 1, 2, 0, 4],
    [2, 5, 0, 4, 1, 3], [5, 2, 4, 1, 3, 0], [4, 5, 3, 0, 1, 2], [5, 0, 1, 2, 3, 4],
    [3, 5, 4, 1, 0, 2], [1, 0, 5, 2, 3, 4], [5, 4, 3, 0, 1, 2], [3, 0, 4, 5, 2, 1],
    [5, 2, 0, 4, 1, 3], [1, 4, 5, 0, 3, 2], [3, 0, 1, 5, 2, 4], [1, 5, 4, 0, 3, 2],
    [3, 2, 1, 5, 0, 4], [2, 0, 5, 4, 1, 3], [4, 2, 3, 1, 5, 0], [3, 5, 1, 4, 0, 2],
    [5, 0, 4, 2, 1, 3], [4, 3, 5, 0, 2, 1], [5, 2, 1, 4, 3, 0], [1, 5, 3, 2, 0, 4],
    [5, 0, 1, 4, 3, 2], [2, 5, 3, 1, 0, 4], [3, 4, 5, 2, 1, 0], [1, 5, 4, 0, 2, 3],
    [2, 4, 1, 5, 3, 0], [4, 0, 5, 1, 2, 3], [3, 5, 0, 2, 1, 4], [5, 0, 4, 1, 2, 3],
    [3, 2, 0, 5, 1, 4], [2, 3, 1, 4, 5, 0], [1, 4, 3, 5, 0, 2], [3, 5, 0, 1, 2, 4],
    [2, 0, 3, 4, 5, 1], [5, 4, 1, 2, 0, 3], [3, 0, 5, 1, 2, 4], [1, 3, 4, 2, 5, 0],
    [3, 4, 5, 0, 2, 1], [4, 2, 0, 5, 1, 3], [1, 5, 3, 4, 0, 2], [3, 2, 0, 1, 5, 4],
    [4, 3, 5, 0, 1, 2], [5, 2, 3, 4, 0, 1], [3, 0, 5, 2, 1, 4], [1, 3, 4, 0, 5, 2],
    [2, 4, 3, 5, 1, 0], [5, 3, 0, 4, 2, 1], [4, 2, 3, 5, 1, 0], [5, 4, 0, 1, 3, 2],
    [3, 5, 1, 0, 2, 4], [4, 3, 5, 2, 0, 1], [3, 0, 1, 4, 5, 2], [5, 3, 4, 2, 1, 0],
    [4, 5, 1, 0, 2, 3], [1, 3, 0, 2, 5, 4], [2, 5, 4, 1, 3, 0], [5, 4, 3, 2, 0, 1],
    [1, 0, 4, 5, 3, 2], [2, 4, 5, 1, 0, 3], [3, 2, 1, 4, 5, 0], [2, 5, 0, 1, 3, 4],
    [3, 2, 5, 4, 0, 1], [1, 5, 3, 0, 2, 4], [2, 0, 4, 1, 5, 3], [1, 2, 3, 5, 0, 4],
    [4, 5, 0, 2, 1, 3], [2, 4, 5, 1, 3, 0], [4, 3, 1, 5, 0, 2], [5, 2, 0, 4, 3, 1],
    [2, 3, 4, 5, 1, 0], [4, 0, 3, 1, 5, 2], [1, 3, 5, 0, 2, 4], [2, 0, 4, 5, 3, 1],
    [4, 3, 5, 2, 1, 0], [1, 4, 3, 0, 5, 2], [5, 0, 1, 4, 2, 3], [2, 3, 4, 5, 0, 1],
    [5, 4, 3, 2, 1, 0], [4, 3, 5, 1, 0, 2], [5, 4, 0, 2, 3, 1], [1, 0, 4, 5, 2, 3],
    [2, 5, 3, 0, 1, 4], [1, 4, 0, 2, 5, 3], [5, 2, 3, 4, 1, 0], [4, 5, 0, 1, 3, 2],
    [1, 2, 3, 4, 5, 0], [5, 0, 4, 2, 3, 1], [1, 2, 3, 0, 5, 4], [4, 0, 5, 1, 3, 2],
    [2, 4, 3, 5, 0, 1], [5, 2, 0, 1, 3, 4], [2, 3, 5, 4, 1, 0], [4, 5, 0, 2, 3, 1],
    [2, 4, 3, 1, 5, 0], [3, 2, 5, 0, 1, 4], [1, 5, 0, 4, 3, 2], [4, 3, 1, 5, 2, 0],
    [3, 5, 4, 2, 0, 1], [2, 4, 0, 1, 5, 3], [3, 5, 4, 0, 1, 2], [1, 4, 5, 2, 0, 3],
    [4, 5, 1, 0, 3, 2], [2, 0, 4, 5, 1, 3], [4, 3, 5, 1, 2, 0], [2, 0, 1, 4, 5, 3],
    [3, 4, 5, 2, 0, 1], [2, 5, 3, 4, 1, 0], [5, 3, 4, 2, 0, 1], [2, 5, 1, 0, 3, 4],
    [4, 3, 0, 5, 1, 2], [1, 0, 5, 4, 2, 3], [3, 4, 1, 2, 5, 0], [5, 0, 3, 4, 1, 2],
    [3, 5, 1, 2, 0, 4], [4, 2, 0, 5, 3, 1], [3, 0, 5, 4, 1, 2], [4, 5, 1, 2, 3, 0],
    [2, 0, 3, 5, 1, 4], [1, 3, 0, 4, 5, 2], [2, 0, 5, 1, 3, 4], [4, 2, 1, 0, 5, 3],
    [5, 3, 0, 2, 1, 4], [2, 4, 5, 0, 3, 1], [1, 0, 3, 4, 5, 2], [5, 3, 1, 0, 2, 4],
    [1, 5, 4, 2, 3, 0], [2, 3, 0, 1, 5, 4], [4, 2, 1, 5, 0, 3], [3, 0, 5, 4, 2, 1],
    [5, 4, 1, 0, 3, 2], [2, 3, 5, 4, 0, 1], [3, 2, 4, 5, 1, 0], [2, 0, 5, 4, 3, 1],
    [5, 2, 3, 0, 1, 4], [3, 4, 5, 1, 0, 2], [2, 0, 1, 5, 3, 4], [3, 5, 4, 2, 1, 0],
    [1, 0, 3, 5, 2, 4], [2, 5, 4, 0, 1, 3], [5, 4, 1, 2, 3, 0], [4, 2, 5, 0, 1, 3],
    [3, 5, 1, 4, 2, 0], [5, 0, 4, 1, 3, 2], [4, 2, 3, 5, 0, 1], [2, 3, 1, 0, 5, 4],
    [1, 5, 3, 4, 2, 0], [2, 4, 1, 5, 0, 3], [3, 2, 4, 1, 5, 0], [5, 4, 1, 0, 2, 3],
    [2, 0, 3, 1, 5, 4], [5, 4, 0, 2, 1, 3], [4, 2, 5, 0, 3, 1], [5, 3, 0, 1, 2, 4],
    [2, 5, 1, 4, 0, 3], [4, 0, 5, 2, 3, 1], [3, 4, 1, 5, 2, 0], [4, 0, 5, 2, 1, 3],
    [3, 2, 4, 0, 5, 1], [1, 4, 5, 2, 3, 0], [3, 0, 4, 5, 1, 2], [5, 3, 1, 4, 2, 0],
    [3, 4, 0, 1, 5, 2], [1, 3, 4, 5, 2, 0], [5, 0, 3, 2, 1, 4], [1, 2, 4, 5, 0, 3],
    [2, 3, 0, 4, 5, 1], [5, 2, 4, 0, 1, 3], [2, 3, 1, 5, 0, 4], [1, 5, 0, 4, 2, 3],
    [2, 4, 3, 0, 5, 1], [1, 3, 0, 5, 2, 4], [3, 0, 4, 2, 5, 1], [1, 3, 5, 4, 0, 2],
    [4, 5, 3, 1, 2, 0], [2, 3, 4, 0, 5, 1], [3, 2, 5, 4, 1, 0], [4, 3, 1, 0, 5, 2],
    [1, 2, 5, 4, 3, 0], [3, 4, 0, 2, 5, 1], [1, 3, 5, 4, 2, 0], [2, 4, 1, 0, 5, 3],
    [3, 5, 0, 4, 1, 2], [5, 3, 4, 0, 2, 1], [3, 4, 0, 5, 1, 2], [4, 5, 1, 2, 0, 3],
    [3, 4, 0, 5, 2, 1], [1, 0, 5, 4, 3, 2], [3, 2, 4, 5, 0, 1], [1, 4, 5, 0, 2, 3],
    [4, 0, 3, 5, 1, 2], [3, 2, 0, 4, 5, 1], [5, 3, 4, 0, 1, 2], [4, 2, 5, 1, 0, 3],
    [1, 5, 0, 2, 3, 4], [4, 2, 3, 0, 5, 1], [1, 4, 0, 5, 2, 3], [5, 3, 1, 4, 0, 2],
    [1, 4, 3, 5, 2, 0], [5, 2, 4, 1, 0, 3], [3, 0, 1, 2, 5, 4], [5, 2, 4, 0, 3, 1],
    [2, 4, 0, 5, 1, 3], [1, 2, 5, 0, 3, 4], [5, 4, 3, 1, 2, 0], [1, 2, 5, 4, 0, 3],
    [2, 4, 0, 5, 3, 1], [4, 0, 1, 2, 5, 3], [3, 4, 5, 1, 2, 0], [1, 0, 3, 2, 5, 4],
    [3, 5, 0, 4, 2, 1], [2, 3, 4, 1, 5, 0], [4, 5, 3, 0, 2, 1], [1, 4, 0, 5, 3, 2],
];

/// For each digest byte position, the byte offset within the 384-bit state
/// (treated as the little-endian concatenation of the six words) to extract
/// after that position's finalization round. A permutation of `0..=47`.
#[rustfmt::skip]
pub const OUTPUT_INDICES: [u8; Digest::BYTES] = [
    19, 25, 21, 27, 0, 17, 8, 26, 44, 30, 18, 13, 28, 14, 23, 38,
    20, 42, 29, 3, 32, 45, 1, 31, 5, 36, 6, 16, 46, 39, 9, 7,
    22, 40, 11, 4, 34, 15, 41, 24, 33, 10, 47, 12, 43, 37, 2, 35,
];

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn mix_rows_are_fixed_point_free_permutations() {
        for (round, row) in MIX_PERMUTATIONS.iter().enumerate() {
            let mut seen = [false; STATE_SIZE];
            for (word, &neighbor) in row.iter().enumerate() {
                assert_ne!(
                    word, neighbor as usize,
                    "round {round}: word {word} must not be mixed with itself"
                );
                seen[neighbor as usize] = true;
            }
            assert!(
                seen.iter().all(|&s| s),
                "round {round}: every state word must appear as a neighbor"
            );
        }
    }

    #[test]
    fn output_indices_cover_the_whole_state() {
        let sorted = OUTPUT_INDICES.iter().copied().sorted().collect_vec();
        let expected = (0..Digest::BYTES as u8).collect_vec();
        assert_eq!(expected, sorted);
    }

    #[test]
    fn xor_rows_are_pairwise_distinct() {
        let distinct_rows = XOR_CONSTANTS.iter().unique().count();
        assert_eq!(TABLE_ROWS, distinct_rows);
    }

    #[test]
    fn add_rows_are_pairwise_distinct() {
        let distinct_rows = ADD_CONSTANTS.iter().unique().count();
        assert_eq!(TABLE_ROWS, distinct_rows);
    }
}
