//! 最小 PDF 1.4 写出器。
//!
//! 只覆盖报表需要的子集：多页、两种 Type1 标准字体（Helvetica /
//! Helvetica-Bold）、未压缩文本内容流、矩形填充。对象布局固定：
//! 1 Catalog、2 Pages、3/4 字体，之后每页两个对象（Page + Contents），
//! 末尾 xref 表按字节偏移回填。
//!
//! 字符串按 PDF 语法转义 `(`、`)`、`\`；坐标系原点在左下角，
//! 单位为 pt。

/// 页面字体。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Font::Regular => "/F1",
            Font::Bold => "/F2",
        }
    }

    /// Helvetica 族的近似平均字符宽（em 比例），只用于居中估算。
    fn avg_width(&self) -> f64 {
        match self {
            Font::Regular => 0.5,
            Font::Bold => 0.54,
        }
    }
}

/// RGB 颜色（0–255）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn ops(&self) -> String {
        format!(
            "{:.3} {:.3} {:.3} rg",
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0
        )
    }
}

/// 多页 PDF 构建器。
pub struct PdfWriter {
    width: f64,
    height: f64,
    pages: Vec<String>,
}

impl PdfWriter {
    /// 创建带一个空白首页的构建器。
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pages: vec![String::new()],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// 开启新页，后续绘制落在新页上。
    pub fn new_page(&mut self) {
        self.pages.push(String::new());
    }

    /// 在当前页绘制一行文本。
    pub fn text(&mut self, font: Font, size: f64, color: Rgb, x: f64, y: f64, content: &str) {
        self.text_on_page(self.pages.len() - 1, font, size, color, x, y, content);
    }

    /// 在指定页绘制一行文本（页脚回填用）。
    pub fn text_on_page(
        &mut self,
        page: usize,
        font: Font,
        size: f64,
        color: Rgb,
        x: f64,
        y: f64,
        content: &str,
    ) {
        let ops = format!(
            "{} BT {} {:.1} Tf {:.2} {:.2} Td ({}) Tj ET\n",
            color.ops(),
            font.resource(),
            size,
            x,
            y,
            escape(content)
        );
        self.pages[page].push_str(&ops);
    }

    /// 指定页居中绘制（宽度按平均字符宽估算；页脚回填用）。
    pub fn text_centered_on_page(
        &mut self,
        page: usize,
        font: Font,
        size: f64,
        color: Rgb,
        y: f64,
        content: &str,
    ) {
        let x = (self.width - estimate_width(font, size, content)) / 2.0;
        self.text_on_page(page, font, size, color, x, y, content);
    }

    /// 在当前页填充矩形（x/y 为左下角）。
    pub fn fill_rect(&mut self, color: Rgb, x: f64, y: f64, w: f64, h: f64) {
        let ops = format!("{} {:.2} {:.2} {:.2} {:.2} re f\n", color.ops(), x, y, w, h);
        let page = self.pages.len() - 1;
        self.pages[page].push_str(&ops);
    }

    /// 组装 PDF 字节：对象序列 + xref + trailer。
    pub fn finish(self) -> Vec<u8> {
        let page_count = self.pages.len();
        let object_count = 4 + page_count * 2;
        let mut out: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::with_capacity(object_count);

        out.extend_from_slice(b"%PDF-1.4\n");
        // 二进制标记注释，提示传输层按二进制处理
        out.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let kids = (0..page_count)
            .map(|index| format!("{} 0 R", 5 + index * 2))
            .collect::<Vec<_>>()
            .join(" ");

        offsets.push(out.len());
        out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        offsets.push(out.len());
        out.extend_from_slice(
            format!(
                "2 0 obj\n<< /Type /Pages /Kids [{kids}] /Count {page_count} >>\nendobj\n"
            )
            .as_bytes(),
        );

        offsets.push(out.len());
        out.extend_from_slice(
            b"3 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n",
        );

        offsets.push(out.len());
        out.extend_from_slice(
            b"4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>\nendobj\n",
        );

        for (index, content) in self.pages.iter().enumerate() {
            let page_object = 5 + index * 2;
            let content_object = page_object + 1;

            offsets.push(out.len());
            out.extend_from_slice(
                format!(
                    "{page_object} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.0} {:.0}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {content_object} 0 R >>\nendobj\n",
                    self.width, self.height
                )
                .as_bytes(),
            );

            offsets.push(out.len());
            out.extend_from_slice(
                format!(
                    "{content_object} 0 obj\n<< /Length {} >>\nstream\n{content}endstream\nendobj\n",
                    content.len()
                )
                .as_bytes(),
            );
        }

        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", object_count + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
                object_count + 1
            )
            .as_bytes(),
        );
        out
    }
}

/// 文本宽度估算（居中/右对齐用，非排版精度）。
pub fn estimate_width(font: Font, size: f64, content: &str) -> f64 {
    content.chars().count() as f64 * size * font.avg_width()
}

fn escape(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for ch in content.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
