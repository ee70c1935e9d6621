//! Static descriptor tables driving the capability report. Declaration
//! order is print order.

/// A symbolic texture format the report knows how to name.
pub struct FormatDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub compressed: bool,
    pub desc: &'static str,
}

/// A driver limit to query: `count` is 1 for scalars, 2 for a
/// `[min, max]` pair.
pub struct LimitDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub count: usize,
    pub desc: &'static str,
}

// Compressed format ids from extensions glow does not generate
// constants for (glow only covers core enums).
pub const COMPRESSED_RGB_S3TC_DXT1: u32 = 0x83F0;
pub const COMPRESSED_RGBA_S3TC_DXT1: u32 = 0x83F1;
pub const COMPRESSED_RGBA_S3TC_DXT3: u32 = 0x83F2;
pub const COMPRESSED_RGBA_S3TC_DXT5: u32 = 0x83F3;
pub const COMPRESSED_SRGB_S3TC_DXT1: u32 = 0x8C4C;
pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT1: u32 = 0x8C4D;
pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT3: u32 = 0x8C4E;
pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT5: u32 = 0x8C4F;
pub const ETC1_RGB8: u32 = 0x8D64;
pub const COMPRESSED_RGB_PVRTC_4BPP: u32 = 0x8C00;
pub const COMPRESSED_RGB_PVRTC_2BPP: u32 = 0x8C01;
pub const COMPRESSED_RGBA_PVRTC_4BPP: u32 = 0x8C02;
pub const COMPRESSED_RGBA_PVRTC_2BPP: u32 = 0x8C03;
pub const COMPRESSED_RGBA_ASTC_4X4: u32 = 0x93B0;
pub const COMPRESSED_RGBA_ASTC_8X8: u32 = 0x93B7;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_4X4: u32 = 0x93D0;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_8X8: u32 = 0x93D7;

// glow generates ALIASED_LINE_WIDTH_RANGE but not the point-size
// analog; the id comes from the registry.
pub const ALIASED_POINT_SIZE_RANGE: u32 = 0x846D;

pub static TEXTURE_FORMATS: &[FormatDescriptor] = &[
    FormatDescriptor { id: glow::RGB, name: "GL_RGB", compressed: false, desc: "unsized RGB" },
    FormatDescriptor { id: glow::RGBA, name: "GL_RGBA", compressed: false, desc: "unsized RGBA" },
    FormatDescriptor { id: glow::ALPHA, name: "GL_ALPHA", compressed: false, desc: "unsized alpha-only" },
    FormatDescriptor { id: glow::LUMINANCE, name: "GL_LUMINANCE", compressed: false, desc: "unsized single luminance channel" },
    FormatDescriptor { id: glow::LUMINANCE_ALPHA, name: "GL_LUMINANCE_ALPHA", compressed: false, desc: "unsized luminance + alpha" },
    FormatDescriptor { id: glow::R8, name: "GL_R8", compressed: false, desc: "8-bit red, normalized" },
    FormatDescriptor { id: glow::RG8, name: "GL_RG8", compressed: false, desc: "8-bit red/green, normalized" },
    FormatDescriptor { id: glow::RGB8, name: "GL_RGB8", compressed: false, desc: "8-bit RGB, normalized" },
    FormatDescriptor { id: glow::RGBA8, name: "GL_RGBA8", compressed: false, desc: "8-bit RGBA, normalized" },
    FormatDescriptor { id: glow::RGBA4, name: "GL_RGBA4", compressed: false, desc: "packed 4-bit RGBA" },
    FormatDescriptor { id: glow::RGB5_A1, name: "GL_RGB5_A1", compressed: false, desc: "packed 5-bit RGB, 1-bit alpha" },
    FormatDescriptor { id: glow::RGB565, name: "GL_RGB565", compressed: false, desc: "packed 5/6/5 RGB" },
    FormatDescriptor { id: glow::RGB10_A2, name: "GL_RGB10_A2", compressed: false, desc: "packed 10-bit RGB, 2-bit alpha" },
    FormatDescriptor { id: glow::SRGB8, name: "GL_SRGB8", compressed: false, desc: "8-bit RGB, sRGB encoded" },
    FormatDescriptor { id: glow::SRGB8_ALPHA8, name: "GL_SRGB8_ALPHA8", compressed: false, desc: "8-bit RGBA, sRGB encoded color" },
    FormatDescriptor { id: glow::R16F, name: "GL_R16F", compressed: false, desc: "16-bit float red" },
    FormatDescriptor { id: glow::RG16F, name: "GL_RG16F", compressed: false, desc: "16-bit float red/green" },
    FormatDescriptor { id: glow::RGB16F, name: "GL_RGB16F", compressed: false, desc: "16-bit float RGB" },
    FormatDescriptor { id: glow::RGBA16F, name: "GL_RGBA16F", compressed: false, desc: "16-bit float RGBA" },
    FormatDescriptor { id: glow::R32F, name: "GL_R32F", compressed: false, desc: "32-bit float red" },
    FormatDescriptor { id: glow::RGBA32F, name: "GL_RGBA32F", compressed: false, desc: "32-bit float RGBA" },
    FormatDescriptor { id: glow::R11F_G11F_B10F, name: "GL_R11F_G11F_B10F", compressed: false, desc: "packed small-float RGB" },
    FormatDescriptor { id: glow::RGB9_E5, name: "GL_RGB9_E5", compressed: false, desc: "packed RGB with shared exponent" },
    FormatDescriptor { id: glow::DEPTH_COMPONENT16, name: "GL_DEPTH_COMPONENT16", compressed: false, desc: "16-bit depth" },
    FormatDescriptor { id: glow::DEPTH_COMPONENT24, name: "GL_DEPTH_COMPONENT24", compressed: false, desc: "24-bit depth" },
    FormatDescriptor { id: glow::DEPTH_COMPONENT32F, name: "GL_DEPTH_COMPONENT32F", compressed: false, desc: "32-bit float depth" },
    FormatDescriptor { id: glow::DEPTH24_STENCIL8, name: "GL_DEPTH24_STENCIL8", compressed: false, desc: "24-bit depth + 8-bit stencil" },
    FormatDescriptor { id: glow::DEPTH32F_STENCIL8, name: "GL_DEPTH32F_STENCIL8", compressed: false, desc: "float depth + 8-bit stencil" },
    FormatDescriptor { id: glow::STENCIL_INDEX8, name: "GL_STENCIL_INDEX8", compressed: false, desc: "8-bit stencil" },
    FormatDescriptor { id: glow::COMPRESSED_RED_RGTC1, name: "GL_COMPRESSED_RED_RGTC1", compressed: true, desc: "RGTC single channel" },
    FormatDescriptor { id: glow::COMPRESSED_SIGNED_RED_RGTC1, name: "GL_COMPRESSED_SIGNED_RED_RGTC1", compressed: true, desc: "RGTC single channel, signed" },
    FormatDescriptor { id: glow::COMPRESSED_RG_RGTC2, name: "GL_COMPRESSED_RG_RGTC2", compressed: true, desc: "RGTC two channel" },
    FormatDescriptor { id: glow::COMPRESSED_SIGNED_RG_RGTC2, name: "GL_COMPRESSED_SIGNED_RG_RGTC2", compressed: true, desc: "RGTC two channel, signed" },
    FormatDescriptor { id: glow::COMPRESSED_RGBA_BPTC_UNORM, name: "GL_COMPRESSED_RGBA_BPTC_UNORM", compressed: true, desc: "BPTC RGBA" },
    FormatDescriptor { id: glow::COMPRESSED_SRGB_ALPHA_BPTC_UNORM, name: "GL_COMPRESSED_SRGB_ALPHA_BPTC_UNORM", compressed: true, desc: "BPTC RGBA, sRGB encoded" },
    FormatDescriptor { id: glow::COMPRESSED_RGB_BPTC_SIGNED_FLOAT, name: "GL_COMPRESSED_RGB_BPTC_SIGNED_FLOAT", compressed: true, desc: "BPTC float RGB, signed" },
    FormatDescriptor { id: glow::COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT, name: "GL_COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT", compressed: true, desc: "BPTC float RGB, unsigned" },
    FormatDescriptor { id: glow::COMPRESSED_R11_EAC, name: "GL_COMPRESSED_R11_EAC", compressed: true, desc: "EAC single channel" },
    FormatDescriptor { id: glow::COMPRESSED_SIGNED_R11_EAC, name: "GL_COMPRESSED_SIGNED_R11_EAC", compressed: true, desc: "EAC single channel, signed" },
    FormatDescriptor { id: glow::COMPRESSED_RG11_EAC, name: "GL_COMPRESSED_RG11_EAC", compressed: true, desc: "EAC two channel" },
    FormatDescriptor { id: glow::COMPRESSED_SIGNED_RG11_EAC, name: "GL_COMPRESSED_SIGNED_RG11_EAC", compressed: true, desc: "EAC two channel, signed" },
    FormatDescriptor { id: glow::COMPRESSED_RGB8_ETC2, name: "GL_COMPRESSED_RGB8_ETC2", compressed: true, desc: "ETC2 RGB" },
    FormatDescriptor { id: glow::COMPRESSED_SRGB8_ETC2, name: "GL_COMPRESSED_SRGB8_ETC2", compressed: true, desc: "ETC2 RGB, sRGB encoded" },
    FormatDescriptor { id: glow::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2, name: "GL_COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2", compressed: true, desc: "ETC2 RGB, 1-bit alpha" },
    FormatDescriptor { id: glow::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2, name: "GL_COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2", compressed: true, desc: "ETC2 sRGB, 1-bit alpha" },
    FormatDescriptor { id: glow::COMPRESSED_RGBA8_ETC2_EAC, name: "GL_COMPRESSED_RGBA8_ETC2_EAC", compressed: true, desc: "ETC2 RGB + EAC alpha" },
    FormatDescriptor { id: glow::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC, name: "GL_COMPRESSED_SRGB8_ALPHA8_ETC2_EAC", compressed: true, desc: "ETC2 sRGB + EAC alpha" },
    FormatDescriptor { id: COMPRESSED_RGB_S3TC_DXT1, name: "GL_COMPRESSED_RGB_S3TC_DXT1_EXT", compressed: true, desc: "S3TC/DXT1 RGB" },
    FormatDescriptor { id: COMPRESSED_RGBA_S3TC_DXT1, name: "GL_COMPRESSED_RGBA_S3TC_DXT1_EXT", compressed: true, desc: "S3TC/DXT1 RGB, 1-bit alpha" },
    FormatDescriptor { id: COMPRESSED_RGBA_S3TC_DXT3, name: "GL_COMPRESSED_RGBA_S3TC_DXT3_EXT", compressed: true, desc: "S3TC/DXT3 RGBA" },
    FormatDescriptor { id: COMPRESSED_RGBA_S3TC_DXT5, name: "GL_COMPRESSED_RGBA_S3TC_DXT5_EXT", compressed: true, desc: "S3TC/DXT5 RGBA" },
    FormatDescriptor { id: COMPRESSED_SRGB_S3TC_DXT1, name: "GL_COMPRESSED_SRGB_S3TC_DXT1_EXT", compressed: true, desc: "S3TC/DXT1 sRGB" },
    FormatDescriptor { id: COMPRESSED_SRGB_ALPHA_S3TC_DXT1, name: "GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT", compressed: true, desc: "S3TC/DXT1 sRGB, 1-bit alpha" },
    FormatDescriptor { id: COMPRESSED_SRGB_ALPHA_S3TC_DXT3, name: "GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT", compressed: true, desc: "S3TC/DXT3 sRGB + alpha" },
    FormatDescriptor { id: COMPRESSED_SRGB_ALPHA_S3TC_DXT5, name: "GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT", compressed: true, desc: "S3TC/DXT5 sRGB + alpha" },
    FormatDescriptor { id: ETC1_RGB8, name: "GL_ETC1_RGB8_OES", compressed: true, desc: "ETC1 RGB" },
    FormatDescriptor { id: COMPRESSED_RGB_PVRTC_4BPP, name: "GL_COMPRESSED_RGB_PVRTC_4BPPV1_IMG", compressed: true, desc: "PVRTC RGB, 4 bpp" },
    FormatDescriptor { id: COMPRESSED_RGB_PVRTC_2BPP, name: "GL_COMPRESSED_RGB_PVRTC_2BPPV1_IMG", compressed: true, desc: "PVRTC RGB, 2 bpp" },
    FormatDescriptor { id: COMPRESSED_RGBA_PVRTC_4BPP, name: "GL_COMPRESSED_RGBA_PVRTC_4BPPV1_IMG", compressed: true, desc: "PVRTC RGBA, 4 bpp" },
    FormatDescriptor { id: COMPRESSED_RGBA_PVRTC_2BPP, name: "GL_COMPRESSED_RGBA_PVRTC_2BPPV1_IMG", compressed: true, desc: "PVRTC RGBA, 2 bpp" },
    FormatDescriptor { id: COMPRESSED_RGBA_ASTC_4X4, name: "GL_COMPRESSED_RGBA_ASTC_4x4_KHR", compressed: true, desc: "ASTC RGBA, 4x4 blocks" },
    FormatDescriptor { id: COMPRESSED_RGBA_ASTC_8X8, name: "GL_COMPRESSED_RGBA_ASTC_8x8_KHR", compressed: true, desc: "ASTC RGBA, 8x8 blocks" },
    FormatDescriptor { id: COMPRESSED_SRGB8_ALPHA8_ASTC_4X4, name: "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_4x4_KHR", compressed: true, desc: "ASTC sRGB + alpha, 4x4 blocks" },
    FormatDescriptor { id: COMPRESSED_SRGB8_ALPHA8_ASTC_8X8, name: "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8x8_KHR", compressed: true, desc: "ASTC sRGB + alpha, 8x8 blocks" },
];

pub static LIMITS: &[LimitDescriptor] = &[
    LimitDescriptor { id: glow::MAX_TEXTURE_SIZE, name: "GL_MAX_TEXTURE_SIZE", count: 1, desc: "largest 2D texture dimension" },
    LimitDescriptor { id: glow::MAX_3D_TEXTURE_SIZE, name: "GL_MAX_3D_TEXTURE_SIZE", count: 1, desc: "largest 3D texture dimension" },
    LimitDescriptor { id: glow::MAX_CUBE_MAP_TEXTURE_SIZE, name: "GL_MAX_CUBE_MAP_TEXTURE_SIZE", count: 1, desc: "largest cube map face dimension" },
    LimitDescriptor { id: glow::MAX_ARRAY_TEXTURE_LAYERS, name: "GL_MAX_ARRAY_TEXTURE_LAYERS", count: 1, desc: "layers in an array texture" },
    LimitDescriptor { id: glow::MAX_RENDERBUFFER_SIZE, name: "GL_MAX_RENDERBUFFER_SIZE", count: 1, desc: "largest renderbuffer dimension" },
    LimitDescriptor { id: glow::MAX_VIEWPORT_DIMS, name: "GL_MAX_VIEWPORT_DIMS", count: 2, desc: "viewport width and height" },
    LimitDescriptor { id: ALIASED_POINT_SIZE_RANGE, name: "GL_ALIASED_POINT_SIZE_RANGE", count: 2, desc: "point raster size range" },
    LimitDescriptor { id: glow::ALIASED_LINE_WIDTH_RANGE, name: "GL_ALIASED_LINE_WIDTH_RANGE", count: 2, desc: "line raster width range" },
    LimitDescriptor { id: glow::SUBPIXEL_BITS, name: "GL_SUBPIXEL_BITS", count: 1, desc: "subpixel precision of window coordinates" },
    LimitDescriptor { id: glow::MAX_VERTEX_ATTRIBS, name: "GL_MAX_VERTEX_ATTRIBS", count: 1, desc: "vertex shader attribute slots" },
    LimitDescriptor { id: glow::MAX_VERTEX_UNIFORM_COMPONENTS, name: "GL_MAX_VERTEX_UNIFORM_COMPONENTS", count: 1, desc: "vertex shader uniform components" },
    LimitDescriptor { id: glow::MAX_VERTEX_UNIFORM_VECTORS, name: "GL_MAX_VERTEX_UNIFORM_VECTORS", count: 1, desc: "vertex shader uniform vec4s" },
    LimitDescriptor { id: glow::MAX_VERTEX_UNIFORM_BLOCKS, name: "GL_MAX_VERTEX_UNIFORM_BLOCKS", count: 1, desc: "uniform blocks per vertex shader" },
    LimitDescriptor { id: glow::MAX_VERTEX_OUTPUT_COMPONENTS, name: "GL_MAX_VERTEX_OUTPUT_COMPONENTS", count: 1, desc: "vertex shader output components" },
    LimitDescriptor { id: glow::MAX_VERTEX_TEXTURE_IMAGE_UNITS, name: "GL_MAX_VERTEX_TEXTURE_IMAGE_UNITS", count: 1, desc: "texture units usable in a vertex shader" },
    LimitDescriptor { id: glow::MAX_FRAGMENT_UNIFORM_COMPONENTS, name: "GL_MAX_FRAGMENT_UNIFORM_COMPONENTS", count: 1, desc: "fragment shader uniform components" },
    LimitDescriptor { id: glow::MAX_FRAGMENT_UNIFORM_VECTORS, name: "GL_MAX_FRAGMENT_UNIFORM_VECTORS", count: 1, desc: "fragment shader uniform vec4s" },
    LimitDescriptor { id: glow::MAX_FRAGMENT_UNIFORM_BLOCKS, name: "GL_MAX_FRAGMENT_UNIFORM_BLOCKS", count: 1, desc: "uniform blocks per fragment shader" },
    LimitDescriptor { id: glow::MAX_FRAGMENT_INPUT_COMPONENTS, name: "GL_MAX_FRAGMENT_INPUT_COMPONENTS", count: 1, desc: "fragment shader input components" },
    LimitDescriptor { id: glow::MAX_TEXTURE_IMAGE_UNITS, name: "GL_MAX_TEXTURE_IMAGE_UNITS", count: 1, desc: "texture units usable in a fragment shader" },
    LimitDescriptor { id: glow::MAX_COMBINED_TEXTURE_IMAGE_UNITS, name: "GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS", count: 1, desc: "texture units across all shader stages" },
    LimitDescriptor { id: glow::MAX_VARYING_COMPONENTS, name: "GL_MAX_VARYING_COMPONENTS", count: 1, desc: "interpolated varying components" },
    LimitDescriptor { id: glow::MAX_VARYING_VECTORS, name: "GL_MAX_VARYING_VECTORS", count: 1, desc: "interpolated varying vec4s" },
    LimitDescriptor { id: glow::MAX_UNIFORM_BLOCK_SIZE, name: "GL_MAX_UNIFORM_BLOCK_SIZE", count: 1, desc: "bytes per uniform block" },
    LimitDescriptor { id: glow::MAX_UNIFORM_BUFFER_BINDINGS, name: "GL_MAX_UNIFORM_BUFFER_BINDINGS", count: 1, desc: "uniform buffer binding points" },
    LimitDescriptor { id: glow::MAX_COMBINED_UNIFORM_BLOCKS, name: "GL_MAX_COMBINED_UNIFORM_BLOCKS", count: 1, desc: "uniform blocks across all shader stages" },
    LimitDescriptor { id: glow::UNIFORM_BUFFER_OFFSET_ALIGNMENT, name: "GL_UNIFORM_BUFFER_OFFSET_ALIGNMENT", count: 1, desc: "alignment of uniform buffer offsets" },
    LimitDescriptor { id: glow::MAX_DRAW_BUFFERS, name: "GL_MAX_DRAW_BUFFERS", count: 1, desc: "simultaneous render targets" },
    LimitDescriptor { id: glow::MAX_COLOR_ATTACHMENTS, name: "GL_MAX_COLOR_ATTACHMENTS", count: 1, desc: "framebuffer color attachment points" },
    LimitDescriptor { id: glow::MAX_SAMPLES, name: "GL_MAX_SAMPLES", count: 1, desc: "multisample sample count" },
    LimitDescriptor { id: glow::MAX_ELEMENTS_VERTICES, name: "GL_MAX_ELEMENTS_VERTICES", count: 1, desc: "recommended vertices per draw range" },
    LimitDescriptor { id: glow::MAX_ELEMENTS_INDICES, name: "GL_MAX_ELEMENTS_INDICES", count: 1, desc: "recommended indices per draw range" },
    LimitDescriptor { id: glow::MAX_ELEMENT_INDEX, name: "GL_MAX_ELEMENT_INDEX", count: 1, desc: "largest usable element index" },
    LimitDescriptor { id: glow::MAX_TEXTURE_LOD_BIAS, name: "GL_MAX_TEXTURE_LOD_BIAS", count: 1, desc: "absolute texture level-of-detail bias" },
    LimitDescriptor { id: glow::MAX_TRANSFORM_FEEDBACK_SEPARATE_ATTRIBS, name: "GL_MAX_TRANSFORM_FEEDBACK_SEPARATE_ATTRIBS", count: 1, desc: "separate transform feedback attributes" },
    LimitDescriptor { id: glow::MAX_TRANSFORM_FEEDBACK_INTERLEAVED_COMPONENTS, name: "GL_MAX_TRANSFORM_FEEDBACK_INTERLEAVED_COMPONENTS", count: 1, desc: "interleaved transform feedback components" },
];

/// Reverse lookup by enum id, first match wins. Callers render misses
/// as a hex token.
pub fn format_name(id: u32) -> Option<&'static str> {
    TEXTURE_FORMATS.iter().find(|f| f.id == id).map(|f| f.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_ids_are_unique() {
        for (i, a) in TEXTURE_FORMATS.iter().enumerate() {
            for b in &TEXTURE_FORMATS[i + 1..] {
                assert_ne!(a.id, b.id, "{} and {} share an id", a.name, b.name);
            }
        }
    }

    #[test]
    fn limit_ids_are_unique_and_counts_sane() {
        for (i, a) in LIMITS.iter().enumerate() {
            assert!(a.count == 1 || a.count == 2, "{} has count {}", a.name, a.count);
            for b in &LIMITS[i + 1..] {
                assert_ne!(a.id, b.id, "{} and {} share an id", a.name, b.name);
            }
        }
    }

    #[test]
    fn point_size_range_is_a_registered_pair_limit() {
        let limit = LIMITS.iter().find(|l| l.id == ALIASED_POINT_SIZE_RANGE).unwrap();
        assert_eq!(limit.id, 0x846D);
        assert_eq!(limit.count, 2);
    }

    #[test]
    fn reverse_lookup_hits_registered_names() {
        assert_eq!(format_name(glow::RGBA8), Some("GL_RGBA8"));
        assert_eq!(format_name(COMPRESSED_RGBA_S3TC_DXT5), Some("GL_COMPRESSED_RGBA_S3TC_DXT5_EXT"));
    }

    #[test]
    fn reverse_lookup_misses_unregistered_ids() {
        assert_eq!(format_name(0xBEEF), None);
    }
}
