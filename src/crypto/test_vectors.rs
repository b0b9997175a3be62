//! Fixed development key material and vectors shared by the crypto tests.
//!
//! Generated once offline from a throwaway RSA-2048 key. Never use this key
//! to sign production firmware.

pub const MODULUS: [u8; 256] = [
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

pub const EXPONENT: u32 = 65537;

/// Firmware image used across the tests: byte `i` is `i % 251`.
pub fn firmware() -> [u8; 1024] {
    let mut image = [0u8; 1024];
    image.iter_mut().enumerate().for_each(|(i, b)| *b = (i % 251) as u8);
    image
}

pub const FIRMWARE_DIGEST: [u8; 32] = [
    0x2b, 0xce, 0x1b, 0xa6, 0x28, 0x72, 0x06, 0x64, 0xbe, 0x4b, 0x9f, 0xdd, 0x77, 0xaa, 0xe0, 0x67,
    0x8e, 0x5f, 0x0f, 0x3f, 0x02, 0xfc, 0x6f, 0xf6, 0x41, 0xec, 0x87, 0x90, 0x94, 0xf6, 0xa4, 0x04,
];

pub const FIRMWARE_SIGNATURE: [u8; 256] = [
    0x09, 0x29, 0x49, 0xb8, 0xc1, 0x3a, 0xb2, 0x6c, 0x85, 0xf9, 0x00, 0xf3, 0x52, 0x2c, 0xd1, 0xe3,
    0xdc, 0x15, 0x5e, 0xaa, 0xb2, 0xc1, 0x36, 0x8c, 0xf0, 0x9d, 0xcf, 0xb4, 0xea, 0xc6, 0x91, 0xbf,
    0xab, 0x76, 0x7d, 0x21, 0x01, 0x34, 0x26, 0x26, 0xb3, 0xb7, 0xd7, 0xeb, 0xc1, 0x88, 0x30, 0x08,
    0x13, 0x61, 0xa4, 0x18, 0x8a, 0xa7, 0x30, 0xc9, 0xf8, 0x26, 0x4b, 0x6a, 0xc4, 0x39, 0xdd, 0x31,
    0x3c, 0x83, 0x81, 0x7d, 0x8c, 0x40, 0xb1, 0x6d, 0xcd, 0xfc, 0x76, 0xaf, 0x2d, 0x03, 0x30, 0xdc,
    0xe3, 0x91, 0xfa, 0x74, 0x7c, 0x9b, 0x46, 0x22, 0x2e, 0xf1, 0x05, 0xc1, 0xb4, 0xcf, 0x7d, 0xb3,
    0xb7, 0x82, 0xa7, 0x4e, 0x48, 0x1c, 0xe0, 0x39, 0x2c, 0xb1, 0x14, 0x93, 0x45, 0xcd, 0x63, 0x8f,
    0x7d, 0x13, 0x42, 0x91, 0x2c, 0xc6, 0x79, 0x67, 0x3e, 0x8d, 0xde, 0x0a, 0x2f, 0xba, 0x04, 0x3f,
    0xb6, 0xd1, 0x6e, 0xd4, 0xb4, 0xa5, 0x1d, 0x83, 0xce, 0x17, 0xbe, 0xf2, 0x13, 0x8e, 0xf9, 0x10,
    0x15, 0x60, 0xb9, 0xf2, 0x2e, 0x45, 0xd8, 0x73, 0xf6, 0x30, 0x61, 0x6b, 0xf5, 0x58, 0xd2, 0x9a,
    0xb7, 0x3e, 0xaa, 0xa2, 0x84, 0xee, 0x74, 0xaf, 0xc9, 0x72, 0xe1, 0xc3, 0x22, 0x83, 0x59, 0x73,
    0xc9, 0xad, 0xde, 0x11, 0x25, 0xc1, 0x8e, 0x84, 0xf9, 0x7d, 0x55, 0xf2, 0x8c, 0x8a, 0x94, 0x56,
    0x93, 0x2e, 0xaf, 0xca, 0x89, 0xdb, 0xfa, 0x88, 0xa4, 0xcf, 0x47, 0x66, 0x00, 0xc3, 0x80, 0x8c,
    0x7f, 0x0b, 0x37, 0xa1, 0x96, 0xcc, 0x08, 0xbc, 0xb6, 0x8e, 0x6b, 0x88, 0xd7, 0xf3, 0x4c, 0x32,
    0xf8, 0x39, 0x3a, 0x79, 0x03, 0x3e, 0x32, 0x19, 0xda, 0x25, 0xbf, 0x89, 0xff, 0x78, 0xee, 0x46,
    0x38, 0x78, 0x62, 0x21, 0x34, 0x1e, 0x0c, 0x49, 0x02, 0xdc, 0xe2, 0x2c, 0x4d, 0x04, 0xd8, 0x0f,
];

/// Decrypts to only five bytes of `0xFF` padding before the separator.
pub const SHORT_PADDING_SIGNATURE: [u8; 256] = [
    0x42, 0x9b, 0x52, 0x07, 0xb8, 0x93, 0x61, 0xb0, 0x95, 0x56, 0x52, 0x3b, 0x16, 0x28, 0xfc, 0xe2,
    0xf1, 0xe9, 0x4a, 0xba, 0x19, 0x89, 0xc3, 0x18, 0x9c, 0x2d, 0xf0, 0xa6, 0x20, 0x9c, 0x81, 0xd3,
    0xdf, 0xd0, 0x75, 0x6d, 0xf1, 0x2d, 0x74, 0x7e, 0x93, 0x82, 0x53, 0xd2, 0x16, 0x00, 0xb8, 0x0e,
    0x59, 0xfc, 0x2f, 0xa3, 0xf7, 0x11, 0x44, 0x97, 0xad, 0x69, 0xaf, 0xa4, 0x24, 0x6a, 0x31, 0x66,
    0x5f, 0x0f, 0xb0, 0x87, 0xce, 0x37, 0x87, 0x1d, 0x3f, 0xfe, 0x83, 0x4b, 0x40, 0x82, 0xd0, 0x80,
    0xf6, 0xc9, 0x0b, 0xac, 0x96, 0xb8, 0xbc, 0xd0, 0x16, 0xe0, 0xf1, 0x61, 0xe5, 0x6f, 0xd6, 0x13,
    0xb6, 0x1c, 0xa0, 0xbc, 0xb9, 0x65, 0x43, 0xdd, 0xeb, 0x06, 0x08, 0xca, 0x9c, 0x6e, 0x3e, 0x53,
    0x8e, 0xfd, 0xed, 0x71, 0x3b, 0xd4, 0xcd, 0x5d, 0x0f, 0xd8, 0xb0, 0xb0, 0x5c, 0x7f, 0x86, 0xe1,
    0x4a, 0xa1, 0xc2, 0xa2, 0x89, 0x79, 0x29, 0xa8, 0x93, 0xac, 0x54, 0xe9, 0xf3, 0x9b, 0x3d, 0xa9,
    0x30, 0x54, 0xce, 0x5d, 0xd7, 0xf5, 0xe0, 0x3d, 0x55, 0xc8, 0x26, 0x58, 0x54, 0xdb, 0xc9, 0xe2,
    0xcb, 0xee, 0xbd, 0x98, 0xf4, 0x40, 0x3e, 0xb5, 0xf6, 0xcc, 0xdc, 0xd3, 0x44, 0x4a, 0xbb, 0x53,
    0xbd, 0x6d, 0x05, 0xff, 0x98, 0xd0, 0x0c, 0x30, 0x6e, 0x26, 0xc7, 0x6b, 0xef, 0x5e, 0xb4, 0x3d,
    0xb1, 0x5e, 0xd6, 0x2f, 0x81, 0x44, 0xc7, 0xb1, 0xc7, 0xa0, 0x36, 0xbe, 0xb1, 0x19, 0x41, 0x32,
    0xfb, 0xb1, 0x41, 0x1a, 0x31, 0x2a, 0x1a, 0x81, 0x04, 0x21, 0xde, 0x58, 0x50, 0xec, 0xc9, 0x61,
    0xa0, 0x9b, 0x6b, 0x88, 0x4e, 0x4b, 0x16, 0x78, 0x69, 0x95, 0x94, 0xf4, 0x96, 0x53, 0x83, 0x99,
    0xe6, 0x73, 0xc5, 0x2c, 0xf8, 0x92, 0xd8, 0x9c, 0xe6, 0x7a, 0xcb, 0x5c, 0xc8, 0xee, 0x47, 0x77,
];

/// DigestInfo names SHA-384's OID arc instead of SHA-256.
pub const WRONG_PREFIX_SIGNATURE: [u8; 256] = [
    0x44, 0x9c, 0x87, 0x9f, 0x84, 0xa1, 0x95, 0xce, 0xf4, 0x31, 0x72, 0x46, 0xca, 0x41, 0xd2, 0x23,
    0x46, 0xea, 0x48, 0x5c, 0x17, 0xcf, 0xa7, 0x98, 0xa1, 0xad, 0x9c, 0x4b, 0x82, 0xa3, 0x4d, 0xda,
    0x36, 0x42, 0x23, 0x9e, 0x1b, 0xf9, 0x48, 0x77, 0xd6, 0x7a, 0xc7, 0xa1, 0x22, 0xd5, 0xc4, 0x2f,
    0x29, 0xe4, 0xf0, 0x92, 0x81, 0xa9, 0xbe, 0xb1, 0xd3, 0x55, 0x77, 0xfb, 0x5d, 0x59, 0x1b, 0xc2,
    0x4b, 0xe9, 0x0d, 0xde, 0x79, 0xd1, 0xa8, 0xc1, 0xd9, 0xdb, 0xcf, 0xd4, 0x34, 0xb0, 0xb4, 0x7a,
    0xef, 0xd7, 0x5e, 0xf3, 0x75, 0xf9, 0xa0, 0xd4, 0x99, 0xb3, 0xf0, 0xda, 0x4a, 0x61, 0xcc, 0xa4,
    0xb2, 0x28, 0xd4, 0xcc, 0x5f, 0xa4, 0xd4, 0x63, 0x8b, 0x6f, 0x1e, 0xcf, 0x48, 0xed, 0x85, 0x67,
    0x28, 0xe4, 0xfa, 0x84, 0x26, 0x1d, 0xfd, 0xb3, 0xd6, 0xfa, 0xe1, 0x18, 0xe8, 0xf8, 0x1d, 0xdd,
    0xd7, 0x6f, 0xf6, 0xce, 0x9d, 0x68, 0xc4, 0x91, 0xa1, 0x90, 0x5d, 0xdd, 0x18, 0xfe, 0x8a, 0xa9,
    0xc1, 0x86, 0x65, 0x5c, 0x9a, 0x57, 0x5b, 0xd7, 0x0e, 0x5e, 0xd0, 0xf9, 0xf1, 0x40, 0xfe, 0xc5,
    0x5b, 0xd8, 0xdc, 0x98, 0xfd, 0x49, 0xce, 0xcb, 0x7e, 0x30, 0x97, 0x81, 0xef, 0x0f, 0x5e, 0xb9,
    0xf2, 0xc0, 0x5a, 0x6c, 0x80, 0x8f, 0x21, 0x6b, 0x41, 0x82, 0xa8, 0xc2, 0xb6, 0xb9, 0x11, 0x93,
    0xaa, 0x00, 0x9b, 0xaf, 0x06, 0x88, 0x4c, 0xff, 0xff, 0x78, 0xd7, 0xaf, 0x3f, 0x24, 0xb9, 0xc2,
    0x3d, 0xca, 0x16, 0x63, 0xed, 0xf6, 0x92, 0xab, 0xb8, 0x69, 0x93, 0x3e, 0x23, 0x0c, 0x0d, 0x0a,
    0xc7, 0x73, 0xa7, 0x5a, 0xd1, 0xdf, 0x57, 0x45, 0x44, 0x00, 0x80, 0xcf, 0xa6, 0x49, 0x4e, 0x34,
    0x12, 0x65, 0xce, 0xe0, 0x86, 0x79, 0xf0, 0xaa, 0xa0, 0x01, 0xbf, 0x45, 0xaa, 0x9d, 0x52, 0xa0,
];

/// Well formed padding, but one stray byte follows the digest.
pub const TRAILING_BYTE_SIGNATURE: [u8; 256] = [
    0xb8, 0x1d, 0x33, 0x86, 0x60, 0x34, 0xfe, 0x8b, 0x40, 0xa2, 0x64, 0x52, 0xce, 0xf9, 0x06, 0x55,
    0x60, 0xbb, 0xa1, 0x28, 0xe7, 0xf2, 0x6d, 0x5f, 0x88, 0x68, 0xd2, 0x51, 0x04, 0x7a, 0x8a, 0x32,
    0x06, 0x6e, 0x97, 0x7f, 0x77, 0x28, 0x7f, 0xfb, 0x35, 0xf7, 0xfc, 0x08, 0xae, 0xf5, 0x74, 0x35,
    0xb3, 0x56, 0x17, 0x7a, 0xb6, 0x18, 0x81, 0x0f, 0x66, 0x76, 0x60, 0xb1, 0xfb, 0x99, 0x84, 0x99,
    0xc5, 0x44, 0x9c, 0x37, 0x70, 0x83, 0xaf, 0xf0, 0xec, 0xed, 0xae, 0x6e, 0x94, 0xd9, 0x6d, 0x1b,
    0xf3, 0xd8, 0xca, 0x08, 0x71, 0x55, 0x9d, 0xa8, 0x48, 0x6e, 0x77, 0x09, 0x09, 0xab, 0xc3, 0x45,
    0x40, 0xe8, 0x89, 0xab, 0x32, 0x1c, 0x08, 0xf2, 0x16, 0x8a, 0x31, 0x44, 0xf3, 0x0c, 0x9f, 0x71,
    0xd6, 0x3a, 0x2a, 0x66, 0x8e, 0x02, 0xb1, 0xc7, 0xdf, 0x4e, 0xf7, 0xf2, 0xe8, 0xde, 0x25, 0x0d,
    0x98, 0x9b, 0x8a, 0x38, 0x8d, 0xdb, 0x5e, 0xc0, 0xdd, 0x62, 0x62, 0x22, 0x1f, 0xdb, 0xdb, 0x2c,
    0x70, 0xaf, 0xa3, 0x7c, 0xa9, 0xb2, 0xc6, 0xd1, 0x48, 0xd2, 0x3c, 0x72, 0x7c, 0xa7, 0x03, 0x8b,
    0x72, 0x40, 0x14, 0xa5, 0x8e, 0xfe, 0xb2, 0x6c, 0x7b, 0x04, 0xcc, 0x38, 0x50, 0x68, 0x52, 0x17,
    0x0a, 0x3d, 0x89, 0x98, 0xa3, 0xe1, 0x42, 0xd8, 0x6d, 0xae, 0xcf, 0x86, 0x97, 0x47, 0xe6, 0x7b,
    0x9f, 0xbd, 0x2f, 0x34, 0x97, 0xa1, 0xe8, 0x8c, 0x15, 0x6b, 0x64, 0x14, 0x6a, 0xd8, 0x0d, 0xa5,
    0x45, 0x6c, 0xd3, 0xf1, 0x9e, 0x2a, 0x9b, 0x45, 0x4f, 0x0c, 0x37, 0x68, 0xf9, 0x82, 0xab, 0x99,
    0x48, 0x61, 0x29, 0xda, 0x58, 0x47, 0x47, 0x58, 0xa6, 0x0a, 0xed, 0xab, 0x14, 0x8e, 0x31, 0x53,
    0xbe, 0xfe, 0x67, 0xd3, 0x19, 0x72, 0x94, 0xaa, 0x7a, 0xd8, 0x90, 0xb7, 0xd8, 0x90, 0xfa, 0xeb,
];

pub const DIVIDEND: [u8; 188] = [
    0x0c, 0xa2, 0x3d, 0x59, 0x22, 0x17, 0xbe, 0xad, 0xdb, 0xc4, 0x96, 0xcb, 0x8e, 0x81, 0x97, 0x3e,
    0x0b, 0xec, 0xd7, 0xb0, 0x38, 0x98, 0xd1, 0x90, 0xf9, 0xeb, 0xda, 0xcc, 0x0c, 0xb1, 0xe2, 0x9c,
    0x65, 0x8c, 0xda, 0x14, 0x95, 0xe6, 0x0a, 0xf5, 0x93, 0xbd, 0x04, 0xcf, 0x0f, 0xd6, 0x30, 0xf1,
    0xf2, 0x9d, 0x0d, 0xa9, 0x95, 0x3f, 0x48, 0xf1, 0xa0, 0x9f, 0x76, 0xb5, 0xa1, 0x70, 0xb3, 0x38,
    0x39, 0x26, 0x30, 0x59, 0xf2, 0x8c, 0x10, 0x5d, 0x1f, 0xb1, 0x7c, 0x23, 0x90, 0xc1, 0x92, 0xcf,
    0xd3, 0xac, 0x94, 0xaf, 0x0f, 0x21, 0xdd, 0xb6, 0x6c, 0xad, 0x4a, 0x26, 0x8d, 0x11, 0x6e, 0xce,
    0x17, 0x38, 0xf7, 0xd9, 0x3d, 0x9c, 0x17, 0x24, 0x11, 0xe2, 0x0b, 0x8f, 0x6b, 0x0d, 0x54, 0x9b,
    0x6f, 0x03, 0x67, 0x5a, 0x16, 0x00, 0xa3, 0x5a, 0x09, 0x99, 0x50, 0xd8, 0x36, 0xf6, 0x75, 0xcc,
    0x81, 0xe7, 0x4e, 0xf5, 0xe8, 0xe2, 0x5d, 0x94, 0x0e, 0xd9, 0x04, 0x75, 0x95, 0x31, 0x98, 0x5d,
    0x5d, 0x9d, 0xc9, 0xf8, 0x18, 0x18, 0xe8, 0x11, 0x89, 0x2f, 0x90, 0x2b, 0xd2, 0x3f, 0x08, 0x24,
    0x12, 0x8b, 0x2f, 0x33, 0x0c, 0x5c, 0x7f, 0xd0, 0xa6, 0xa3, 0xa4, 0x50, 0x65, 0x13, 0x27, 0x0e,
    0x26, 0x9e, 0x0d, 0x37, 0xf2, 0xa7, 0x4d, 0xe4, 0x52, 0xe6, 0xb4, 0x38,
];

pub const DIVISOR: [u8; 88] = [
    0x08, 0xf4, 0x20, 0x5b, 0x90, 0x7a, 0x70, 0xc3, 0x10, 0x12, 0xf0, 0x37, 0xb6, 0x4c, 0xe4, 0x22,
    0x8c, 0x38, 0xfb, 0x29, 0x18, 0xf1, 0x35, 0xd2, 0x5f, 0x55, 0x72, 0x03, 0x30, 0x18, 0x50, 0xc5,
    0xa3, 0x8f, 0xd5, 0x47, 0x92, 0x3a, 0x73, 0x69, 0x94, 0xe3, 0xbf, 0x91, 0x1a, 0x61, 0xdb, 0xe2,
    0x2e, 0x44, 0x15, 0x8b, 0xae, 0x97, 0xba, 0x94, 0xd0, 0xed, 0xa8, 0x2f, 0x8f, 0x6d, 0x05, 0x58,
    0x4e, 0xf8, 0xaa, 0x38, 0x92, 0x27, 0x66, 0x58, 0x1e, 0x27, 0xa1, 0xc0, 0x8a, 0x6a, 0x63, 0xec,
    0x24, 0xed, 0xe6, 0xa4, 0x6b, 0x4c, 0xb2, 0x43,
];

pub const QUOTIENT: [u8; 101] = [
    0x01, 0x69, 0x38, 0xb4, 0x97, 0x10, 0x87, 0xf3, 0xd0, 0x9e, 0x71, 0xdb, 0x31, 0xde, 0xb7, 0x66,
    0xb3, 0x45, 0x99, 0x31, 0x71, 0x7f, 0x5b, 0xa3, 0xcc, 0x38, 0x30, 0x37, 0x6c, 0x78, 0x98, 0x86,
    0xd0, 0xa2, 0x77, 0x5e, 0x05, 0x36, 0xcc, 0x48, 0x9d, 0x75, 0x13, 0xe5, 0xc7, 0x28, 0xfd, 0xa7,
    0x64, 0x64, 0xdd, 0x73, 0x23, 0x2f, 0x0c, 0x03, 0xc2, 0x36, 0x91, 0xa6, 0xb0, 0x9d, 0x5b, 0xc0,
    0xd1, 0x11, 0x5c, 0x2f, 0xf1, 0xc1, 0xe3, 0x82, 0xd4, 0x32, 0xad, 0x52, 0xba, 0x48, 0xa8, 0x51,
    0x6e, 0x90, 0xd0, 0xa8, 0x37, 0x06, 0x08, 0x89, 0xac, 0x45, 0x39, 0x9a, 0x25, 0xc1, 0x56, 0xd6,
    0xd4, 0xb1, 0x98, 0x39, 0x01,
];

pub const REMAINDER: [u8; 87] = [
    0xdf, 0xae, 0x12, 0x90, 0x18, 0x38, 0x63, 0xaa, 0x46, 0xc2, 0x86, 0xa0, 0xdb, 0x0e, 0x32, 0xda,
    0x11, 0xcd, 0xc9, 0xef, 0x04, 0x17, 0xce, 0x75, 0xfe, 0x37, 0x36, 0x2b, 0x1e, 0xc9, 0xe6, 0xff,
    0x3a, 0x14, 0xd1, 0x33, 0x01, 0x61, 0x4d, 0xa9, 0x58, 0x6e, 0xf0, 0xc5, 0x6d, 0xfe, 0x05, 0x98,
    0x5b, 0x0f, 0xe2, 0xbb, 0xd6, 0x41, 0xac, 0xa1, 0x96, 0xd3, 0xcd, 0x1c, 0x92, 0x8a, 0x5e, 0x91,
    0x2d, 0x49, 0x5d, 0x04, 0x9e, 0x7e, 0x51, 0xbb, 0x65, 0x90, 0x8c, 0x09, 0x07, 0x49, 0xa7, 0xd7,
    0x85, 0x6d, 0x15, 0xa9, 0x21, 0x16, 0xf5,
];

/// `DIVIDEND ^ 65537 mod MODULUS`, left padded to the modulus width.
pub const POWER: [u8; 256] = [
    0xa4, 0x8c, 0x3d, 0xa8, 0x43, 0x26, 0x97, 0x99, 0x40, 0x32, 0x0f, 0x59, 0xa2, 0xfa, 0x7e, 0x8d,
    0x51, 0x7a, 0x90, 0xdd, 0x0b, 0x78, 0x24, 0xd6, 0x84, 0x22, 0xd3, 0x7d, 0x39, 0x2b, 0xe0, 0x31,
    0x33, 0x4b, 0x24, 0x13, 0x5c, 0x29, 0xe2, 0x08, 0xb5, 0x94, 0xf6, 0x0e, 0x84, 0x50, 0x7e, 0xcd,
    0x78, 0xf8, 0xc6, 0xc4, 0x89, 0x2d, 0x47, 0xb8, 0x04, 0x49, 0x18, 0xae, 0xae, 0xc4, 0xb0, 0xb5,
    0x19, 0xf6, 0xe0, 0x59, 0xe6, 0x6a, 0x50, 0x34, 0x2e, 0xbe, 0x93, 0x5c, 0x38, 0xe2, 0xda, 0x85,
    0x34, 0xa5, 0xf0, 0x85, 0xe9, 0xc5, 0x71, 0x2e, 0x7b, 0x23, 0x3d, 0xcf, 0xa3, 0x4e, 0x32, 0xb0,
    0x71, 0xc3, 0xe0, 0x62, 0x6b, 0xde, 0x69, 0x99, 0xc5, 0x2d, 0xbc, 0x73, 0x89, 0xf1, 0xd0, 0x45,
    0xff, 0xd7, 0x3f, 0x6a, 0x18, 0xa0, 0x62, 0x00, 0x8c, 0x7b, 0xe4, 0x9a, 0x11, 0xe6, 0x55, 0x8d,
    0xd4, 0xaa, 0xc0, 0x54, 0xf5, 0x30, 0xf6, 0x17, 0x20, 0x25, 0x0e, 0xa1, 0x95, 0xaa, 0x63, 0x98,
    0x05, 0xb1, 0xf5, 0xa5, 0xc1, 0xf2, 0x98, 0x87, 0x7a, 0xd1, 0x2f, 0x9c, 0x1a, 0x7f, 0x2a, 0xd9,
    0x41, 0x57, 0xd1, 0xe3, 0x45, 0x94, 0x3d, 0x2c, 0x6c, 0x40, 0xca, 0xd5, 0x45, 0x9a, 0x0a, 0x05,
    0x9a, 0x80, 0xf2, 0x6d, 0x93, 0xd3, 0xe2, 0xcf, 0x9e, 0xa0, 0x97, 0x91, 0xe5, 0xb6, 0xd4, 0xec,
    0xb1, 0x5b, 0xb3, 0x42, 0x1c, 0x19, 0x15, 0x45, 0xe3, 0xdb, 0xde, 0xeb, 0xe7, 0xc4, 0x22, 0xaa,
    0x66, 0x24, 0xab, 0x98, 0xde, 0x29, 0x53, 0xa6, 0x07, 0x24, 0x9c, 0x11, 0x12, 0x37, 0xe4, 0x6a,
    0x0c, 0x4d, 0x8b, 0x05, 0x72, 0x30, 0xfb, 0x38, 0x07, 0xf7, 0x1c, 0xcc, 0x0e, 0xde, 0xdc, 0xa2,
    0xb0, 0xc8, 0xe2, 0xba, 0x36, 0x4e, 0x31, 0x36, 0x33, 0xfd, 0x4b, 0x87, 0x33, 0x1f, 0x1e, 0xdf,
];
