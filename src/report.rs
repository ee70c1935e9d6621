//! Renders the capability report. The driver is passed in as an
//! explicit [`CapSource`] so the render path never touches the
//! thread's implicit current-context state directly.

use std::borrow::Cow;
use std::cell::RefCell;
use std::io::{self, Write};

use glow::HasContext;
use tracing::warn;

use crate::host::HostInfo;
use crate::tables;

const LABEL_WIDTH: usize = 50;

/// Everything the report needs to ask a live driver.
pub trait CapSource {
    fn string(&self, param: u32) -> String;
    fn extension_count(&self) -> u32;
    fn extension(&self, index: u32) -> String;
    /// Fills `out` with as many integers as the parameter provides.
    fn integers(&self, param: u32, out: &mut [i32]);
    fn compressed_format_ids(&self) -> Vec<u32>;
    /// Tokens describing the windowing-layer integration (the
    /// GLX/WGL/EGL extension-string analog).
    fn windowing_features(&self) -> Vec<String>;
}

/// [`CapSource`] over a current glow context. Checks `glGetError`
/// after every query and accumulates failures instead of aborting, so
/// a single bad enum never cuts the report short.
pub struct GlowCaps<'a> {
    gl: &'a glow::Context,
    windowing: Vec<String>,
    errors: RefCell<Vec<String>>,
}

impl<'a> GlowCaps<'a> {
    pub fn new(gl: &'a glow::Context, windowing: Vec<String>) -> Self {
        Self { gl, windowing, errors: RefCell::new(Vec::new()) }
    }

    /// Errors accumulated while rendering, in call order.
    pub fn into_errors(self) -> Vec<String> {
        self.errors.into_inner()
    }

    fn check(&self, call: &str) {
        let code = unsafe { self.gl.get_error() };
        if code != glow::NO_ERROR {
            let msg = format!("{call}: {}", describe_gl_error(code));
            warn!("GL error during report: {msg}");
            self.errors.borrow_mut().push(msg);
        }
    }
}

impl CapSource for GlowCaps<'_> {
    fn string(&self, param: u32) -> String {
        let value = unsafe { self.gl.get_parameter_string(param) };
        self.check("glGetString");
        value
    }

    fn extension_count(&self) -> u32 {
        let count = unsafe { self.gl.get_parameter_i32(glow::NUM_EXTENSIONS) };
        self.check("glGetIntegerv(GL_NUM_EXTENSIONS)");
        count.max(0) as u32
    }

    fn extension(&self, index: u32) -> String {
        let name = unsafe { self.gl.get_parameter_indexed_string(glow::EXTENSIONS, index) };
        self.check("glGetStringi(GL_EXTENSIONS)");
        name
    }

    fn integers(&self, param: u32, out: &mut [i32]) {
        unsafe { self.gl.get_parameter_i32_slice(param, out) };
        self.check("glGetIntegerv");
    }

    fn compressed_format_ids(&self) -> Vec<u32> {
        let count = unsafe { self.gl.get_parameter_i32(glow::NUM_COMPRESSED_TEXTURE_FORMATS) };
        self.check("glGetIntegerv(GL_NUM_COMPRESSED_TEXTURE_FORMATS)");

        let mut ids = vec![0i32; count.max(0) as usize];
        if !ids.is_empty() {
            unsafe { self.gl.get_parameter_i32_slice(glow::COMPRESSED_TEXTURE_FORMATS, &mut ids) };
            self.check("glGetIntegerv(GL_COMPRESSED_TEXTURE_FORMATS)");
        }
        ids.into_iter().map(|id| id as u32).collect()
    }

    fn windowing_features(&self) -> Vec<String> {
        self.windowing.clone()
    }
}

fn describe_gl_error(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "unrecognized GL error",
    }
}

fn row<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{label:<width$}: {value}", width = LABEL_WIDTH)
}

/// First row of a group carries the label, continuations leave it
/// blank. A group with no rows prints nothing.
fn group<W, I>(out: &mut W, label: &str, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut label = Some(label);
    for value in rows {
        row(out, label.take().unwrap_or(""), &value)?;
    }
    Ok(())
}

fn resolve_format(id: u32) -> Cow<'static, str> {
    match tables::format_name(id) {
        Some(name) => name.into(),
        None => format!("{id:#06x}").into(),
    }
}

/// Renders the full report in a single pass, in fixed order. Driver
/// errors are accumulated by the [`CapSource`], never raised here.
pub fn render<W: Write>(out: &mut W, host: &HostInfo, caps: &impl CapSource) -> io::Result<()> {
    writeln!(out, "glcaps - OpenGL driver capability report")?;

    row(out, "Operating System", &host.os_version)?;
    row(out, "CPU", &host.cpu_model)?;
    row(out, "Renderer", &caps.string(glow::RENDERER))?;
    row(out, "Vendor", &caps.string(glow::VENDOR))?;
    row(out, "OpenGL Version", &caps.string(glow::VERSION))?;
    row(out, "GLSL Version", &caps.string(glow::SHADING_LANGUAGE_VERSION))?;

    let extensions = (0..caps.extension_count()).map(|i| caps.extension(i));
    group(out, "Extensions", extensions)?;

    group(out, "Display Features", caps.windowing_features())?;

    let standard = tables::TEXTURE_FORMATS
        .iter()
        .filter(|f| !f.compressed)
        .map(|f| format!("{}  {}", f.name, f.desc));
    group(out, "Texture Formats", standard)?;

    let compressed =
        caps.compressed_format_ids().into_iter().map(|id| resolve_format(id).into_owned());
    group(out, "Compressed Texture Formats", compressed)?;

    for limit in tables::LIMITS {
        let mut values = [0i32; 2];
        caps.integers(limit.id, &mut values[..limit.count]);
        let rendered = match limit.count {
            2 => format!("[{}, {}]  {}", values[0], values[1], limit.desc),
            _ => format!("{}  {}", values[0], limit.desc),
        };
        row(out, limit.name, &rendered)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::tables::{LIMITS, TEXTURE_FORMATS};

    #[derive(Default)]
    struct FakeCaps {
        strings: HashMap<u32, String>,
        extensions: Vec<String>,
        integers: HashMap<u32, Vec<i32>>,
        compressed: Vec<u32>,
        windowing: Vec<String>,
    }

    impl CapSource for FakeCaps {
        fn string(&self, param: u32) -> String {
            self.strings.get(&param).cloned().unwrap_or_default()
        }

        fn extension_count(&self) -> u32 {
            self.extensions.len() as u32
        }

        fn extension(&self, index: u32) -> String {
            self.extensions[index as usize].clone()
        }

        fn integers(&self, param: u32, out: &mut [i32]) {
            if let Some(values) = self.integers.get(&param) {
                out.copy_from_slice(&values[..out.len()]);
            } else {
                out.fill(0);
            }
        }

        fn compressed_format_ids(&self) -> Vec<u32> {
            self.compressed.clone()
        }

        fn windowing_features(&self) -> Vec<String> {
            self.windowing.clone()
        }
    }

    fn render_lines(caps: &FakeCaps) -> Vec<String> {
        let host = HostInfo {
            os_version: "Ubuntu 22.04".to_owned(),
            cpu_model: "test cpu".to_owned(),
        };
        let mut out = Vec::new();
        render(&mut out, &host, caps).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_owned).collect()
    }

    fn uncompressed_count() -> usize {
        TEXTURE_FORMATS.iter().filter(|f| !f.compressed).count()
    }

    #[test]
    fn identity_rows_use_fixed_label_width() {
        let mut caps = FakeCaps::default();
        caps.strings.insert(glow::RENDERER, "llvmpipe".to_owned());
        let lines = render_lines(&caps);

        assert_eq!(lines[1], format!("{:<50}: Ubuntu 22.04", "Operating System"));
        assert_eq!(lines[2], format!("{:<50}: test cpu", "CPU"));
        assert_eq!(lines[3], format!("{:<50}: llvmpipe", "Renderer"));
    }

    #[test]
    fn extension_group_labels_first_row_only() {
        let mut caps = FakeCaps::default();
        caps.extensions =
            vec!["GL_ARB_debug_output".to_owned(), "GL_ARB_texture_storage".to_owned()];
        let lines = render_lines(&caps);

        let first = lines.iter().position(|l| l.starts_with("Extensions")).unwrap();
        assert!(lines[first].ends_with("GL_ARB_debug_output"));
        assert_eq!(lines[first + 1], format!("{:<50}: GL_ARB_texture_storage", ""));
    }

    #[test]
    fn standard_formats_print_unconditionally_in_table_order() {
        let lines = render_lines(&FakeCaps::default());

        let start = lines.iter().position(|l| l.starts_with("Texture Formats")).unwrap();
        let expected: Vec<_> = TEXTURE_FORMATS.iter().filter(|f| !f.compressed).collect();
        assert_eq!(expected.len(), uncompressed_count());
        for (i, fmt) in expected.iter().enumerate() {
            assert!(
                lines[start + i].contains(fmt.name),
                "row {i} should be {}, got {:?}",
                fmt.name,
                lines[start + i]
            );
        }
    }

    #[test]
    fn compressed_rows_resolve_names_and_fall_back_to_hex() {
        let mut caps = FakeCaps::default();
        caps.compressed = vec![glow::COMPRESSED_RGB8_ETC2, 0x0042];
        let lines = render_lines(&caps);

        let first =
            lines.iter().position(|l| l.starts_with("Compressed Texture Formats")).unwrap();
        assert!(lines[first].ends_with("GL_COMPRESSED_RGB8_ETC2"));
        assert_eq!(lines[first + 1], format!("{:<50}: 0x0042", ""));
    }

    #[test]
    fn limit_rows_render_scalars_and_pairs() {
        let mut caps = FakeCaps::default();
        caps.integers.insert(glow::MAX_TEXTURE_SIZE, vec![4096]);
        caps.integers.insert(glow::MAX_VIEWPORT_DIMS, vec![1, 256]);
        let lines = render_lines(&caps);

        let size = LIMITS.iter().find(|l| l.id == glow::MAX_TEXTURE_SIZE).unwrap();
        let dims = LIMITS.iter().find(|l| l.id == glow::MAX_VIEWPORT_DIMS).unwrap();
        let size_line = format!("{:<50}: 4096  {}", size.name, size.desc);
        let dims_line = format!("{:<50}: [1, 256]  {}", dims.name, dims.desc);
        assert!(lines.contains(&size_line), "missing {size_line:?}");
        assert!(lines.contains(&dims_line), "missing {dims_line:?}");
    }

    #[test]
    fn empty_driver_renders_exactly_the_fixed_rows() {
        let lines = render_lines(&FakeCaps::default());

        // header + 6 identity rows + the unconditional groups; nothing
        // from the extension/windowing/compressed groups.
        assert_eq!(lines.len(), 1 + 6 + uncompressed_count() + LIMITS.len());
        assert!(!lines.iter().any(|l| l.starts_with("Extensions")));
        assert!(!lines.iter().any(|l| l.starts_with("Display Features")));
        assert!(!lines.iter().any(|l| l.starts_with("Compressed Texture Formats")));
    }
}
