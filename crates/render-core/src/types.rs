use crate::error::RenderError;
use crate::traits::{Paint, RenderSink};
use crate::utils::{flip_y, styled_font_name};
use safedoc_style::TextStyle;
use safedoc_types::{ImageKey, Px, Rect};
use serde::Serialize;
use std::io::Write;

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    BeginPage {
        index: usize,
        width: Px,
        height: Px,
    },
    Text {
        text: String,
        x: Px,
        baseline: Px,
        font: String,
        size: Px,
    },
    Rect {
        rect: Rect,
        paint: Paint,
    },
    Image {
        key: ImageKey,
        rect: Rect,
    },
    EndPage,
}

/// Tracks the open page and turns sink calls into `DrawCommand`s.
#[derive(Debug, Clone)]
struct CommandBuilder {
    base_font: String,
    flip: bool,
    page_height: Option<Px>,
}

impl CommandBuilder {
    fn page_height(&self, call: &'static str) -> Result<Px, RenderError> {
        self.page_height.ok_or(RenderError::NoOpenPage(call))
    }

    fn y(&self, y: Px, page_height: Px) -> Px {
        if self.flip { flip_y(y, page_height) } else { y }
    }

    fn rect(&self, rect: Rect, page_height: Px) -> Rect {
        if self.flip {
            Rect::new(
                rect.x,
                flip_y(rect.bottom(), page_height),
                rect.width,
                rect.height,
            )
        } else {
            rect
        }
    }

    fn begin(&mut self, index: usize, width: Px, height: Px) -> DrawCommand {
        self.page_height = Some(height);
        DrawCommand::BeginPage {
            index,
            width,
            height,
        }
    }

    fn text(
        &self,
        text: &str,
        x: Px,
        baseline: Px,
        style: &TextStyle,
    ) -> Result<DrawCommand, RenderError> {
        let page_height = self.page_height("draw_text")?;
        Ok(DrawCommand::Text {
            text: text.to_string(),
            x,
            baseline: self.y(baseline, page_height),
            font: styled_font_name(&self.base_font, style),
            size: style.font_size,
        })
    }

    fn shape(&self, rect: Rect, paint: Paint) -> Result<DrawCommand, RenderError> {
        let page_height = self.page_height("draw_rect")?;
        Ok(DrawCommand::Rect {
            rect: self.rect(rect, page_height),
            paint,
        })
    }

    fn image(&self, key: &ImageKey, rect: Rect) -> Result<DrawCommand, RenderError> {
        let page_height = self.page_height("draw_image")?;
        Ok(DrawCommand::Image {
            key: key.clone(),
            rect: self.rect(rect, page_height),
        })
    }

    fn end(&mut self) -> Result<DrawCommand, RenderError> {
        self.page_height("end_page")?;
        self.page_height = None;
        Ok(DrawCommand::EndPage)
    }
}

/// Keeps every draw call in memory.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    builder: CommandBuilder,
    commands: Vec<DrawCommand>,
    finished: bool,
}

impl RecordingSink {
    pub fn new(base_font: impl Into<String>) -> Self {
        Self {
            builder: CommandBuilder {
                base_font: base_font.into(),
                flip: false,
                page_height: None,
            },
            commands: Vec::new(),
            finished: false,
        }
    }

    /// Records y coordinates measured up from the page bottom, as PDF does.
    pub fn with_flipped_y(mut self) -> Self {
        self.builder.flip = true;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl RenderSink for RecordingSink {
    fn begin_page(&mut self, page_index: usize, width: Px, height: Px) -> Result<(), RenderError> {
        let command = self.builder.begin(page_index, width, height);
        self.commands.push(command);
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: Px,
        baseline: Px,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        let command = self.builder.text(text, x, baseline, style)?;
        self.commands.push(command);
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), RenderError> {
        let command = self.builder.shape(rect, paint)?;
        self.commands.push(command);
        Ok(())
    }

    fn draw_image(&mut self, key: &ImageKey, rect: Rect) -> Result<(), RenderError> {
        let command = self.builder.image(key, rect)?;
        self.commands.push(command);
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let command = self.builder.end()?;
        self.commands.push(command);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.finished = true;
        Ok(())
    }
}

/// Streams each draw call as one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    builder: CommandBuilder,
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W, base_font: impl Into<String>) -> Self {
        Self {
            builder: CommandBuilder {
                base_font: base_font.into(),
                flip: false,
                page_height: None,
            },
            writer,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, command: &DrawCommand) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.writer, command)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn begin_page(&mut self, page_index: usize, width: Px, height: Px) -> Result<(), RenderError> {
        let command = self.builder.begin(page_index, width, height);
        self.emit(&command)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: Px,
        baseline: Px,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        let command = self.builder.text(text, x, baseline, style)?;
        self.emit(&command)
    }

    fn draw_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), RenderError> {
        let command = self.builder.shape(rect, paint)?;
        self.emit(&command)
    }

    fn draw_image(&mut self, key: &ImageKey, rect: Rect) -> Result<(), RenderError> {
        let command = self.builder.image(key, rect)?;
        self.emit(&command)
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let command = self.builder.end()?;
        self.emit(&command)
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.writer.flush()?;
        Ok(())
    }
}
