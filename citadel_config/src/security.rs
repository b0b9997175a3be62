use serde::{Deserialize, Serialize};

/// Byte width of an RSA-2048 modulus.
pub const RSA_2048_MODULUS_BYTES: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityMode {
    /// Images are accepted without any signature check.
    None,
    /// Images must carry a PKCS#1 v1.5 RSA-2048 signature over their SHA-256 digest.
    Rsa2048,
}

impl Default for SecurityMode {
    fn default() -> Self { SecurityMode::Rsa2048 }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfiguration {
    pub security_mode: SecurityMode,
    /// Big-endian public modulus.
    pub modulus: Vec<u8>,
    pub exponent: u32,
}

impl Default for SecurityConfiguration {
    fn default() -> Self {
        Self {
            security_mode: SecurityMode::default(),
            modulus: DEVELOPMENT_MODULUS.to_vec(),
            exponent: 65537,
        }
    }
}

/// Public half of the development signing key. Images signed with its
/// private counterpart are only meant for bench testing.
pub const DEVELOPMENT_MODULUS: [u8; RSA_2048_MODULUS_BYTES] = [
    0xba, 0x85, 0x24, 0xfe, 0x4c, 0x15, 0x4b, 0x85, 0x60, 0x22, 0x83, 0x75, 0x2a, 0xbe, 0xa3, 0x93,
    0xfb, 0x05, 0x72, 0xe9, 0xea, 0xc5, 0x5f, 0x3d, 0x6d, 0x7c, 0x65, 0x51, 0xe3, 0x6f, 0x7d, 0x53,
    0x27, 0x66, 0x22, 0xfc, 0xc2, 0xe3, 0x5f, 0x64, 0xb9, 0x3a, 0x58, 0x59, 0x21, 0xc4, 0x27, 0x96,
    0x3c, 0x79, 0x40, 0x34, 0x95, 0xf3, 0xdd, 0xd7, 0x0e, 0x5c, 0xac, 0xf4, 0x05, 0x08, 0xd6, 0xa1,
    0x2f, 0xdf, 0x3d, 0x25, 0xf5, 0x5c, 0x5f, 0x80, 0xe8, 0xd4, 0xe6, 0x02, 0xe9, 0x5e, 0x77, 0x18,
    0x8e, 0xbc, 0xab, 0x21, 0x80, 0xbc, 0xd0, 0x19, 0x0b, 0xb2, 0xaa, 0xfc, 0xac, 0x5d, 0xa8, 0x41,
    0x7b, 0xf2, 0x2c, 0x18, 0x0d, 0x31, 0x70, 0x09, 0x39, 0x6f, 0xb9, 0x6c, 0x68, 0xec, 0x3b, 0xf6,
    0x4f, 0x39, 0x65, 0x93, 0xf8, 0x81, 0x4f, 0xe1, 0x9b, 0x25, 0x3d, 0x03, 0x2e, 0x0e, 0xa3, 0x69,
    0x35, 0x59, 0xb8, 0xe1, 0x3f, 0x0e, 0x0b, 0x31, 0xb5, 0xc1, 0xab, 0xae, 0xe2, 0x63, 0x78, 0x2c,
    0xd4, 0xcd, 0x57, 0x31, 0x15, 0x41, 0x01, 0x52, 0x2e, 0x2c, 0xf6, 0x4f, 0x58, 0xcf, 0x29, 0xd6,
    0x01, 0xc9, 0xcd, 0x03, 0xbc, 0x1c, 0x66, 0x75, 0x6c, 0xe1, 0x6f, 0x3c, 0xd3, 0xab, 0xfd, 0x8e,
    0x13, 0x8a, 0x72, 0x63, 0xb0, 0x7a, 0xdd, 0x55, 0x9a, 0x10, 0x2d, 0x12, 0xd6, 0xb1, 0x76, 0x33,
    0xcd, 0xe7, 0x62, 0x27, 0x42, 0x21, 0x09, 0xce, 0x1f, 0x77, 0x9b, 0x38, 0xb0, 0x6f, 0xd7, 0xe6,
    0xda, 0x96, 0xa1, 0x07, 0x13, 0x1b, 0x51, 0x0f, 0x4d, 0x1b, 0x7a, 0x62, 0xdc, 0x1f, 0x0d, 0xc5,
    0x3d, 0xa8, 0xb4, 0x69, 0x39, 0xb2, 0xe9, 0x84, 0xd9, 0x7a, 0xa8, 0x7c, 0x84, 0x79, 0x88, 0xb6,
    0x0d, 0xae, 0x79, 0x2b, 0x7e, 0xa8, 0xf0, 0xb6, 0x75, 0x02, 0xb6, 0xa9, 0xd5, 0xd3, 0x45, 0x03,
];
