//! Commands: one user action each, run against a [`SlideHost`].
//!
//! Every command follows the same shape: read shapes from the host, hand
//! plain rectangles, labels or palettes to the pure helpers, write the
//! results back, `sync` once, and report a [`Notification`].

use crate::actor::Keymap;
use crate::config::Config;
use crate::elements::{join_text, next_sticker_number, slide_template, split_text, ElementSpec, TemplateKind};
use crate::error::{Error, Result};
use crate::host::{LineFormat, Shape, ShapeId, ShapeKind, SlideHost};
use crate::layout::{align_to, distribute_indexed, match_width, snap_to_grid, Alignment, Axis, Rect};
use crate::notify::Notification;
use crate::style::{palette_run, Font, Rgb, TextRole};
use std::str::FromStr;
use std::time::Duration;

/// Items a freshly inserted legend lists.
const DEFAULT_LEGEND_ITEMS: [&str; 3] = ["Item 1", "Item 2", "Item 3"];

/// Placeholder text of an inserted text box.
const DEFAULT_TEXT_BOX_TEXT: &str = "Click to edit text";

/// A user action the engine can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the selected text into a filled autoshape of the given kind.
    TextToAutoshape(ShapeKind),
    /// Split one selected text box in two, or join two into one.
    SplitJoinTextboxes,
    /// Give the selection the first shape's width.
    MakeSameWidth,
    /// Align the selection.
    Align(Alignment),
    /// Distribute the selection evenly.
    Distribute(Axis),
    /// Insert a source footnote.
    InsertFootnote,
    /// Insert a legend box.
    InsertLegend,
    /// Insert the next numbered sticker.
    InsertSticker,
    /// Insert a text box styled for a typography role.
    InsertTextBox(TextRole),
    /// Fill the selection with the accent palette, in order.
    CycleAccentColors,
    /// Fill the selection with the brand palette from a start slot.
    ApplyBrandColors {
        /// Palette slot of the first shape.
        start: usize,
    },
    /// Fill the whole selection with one colour.
    ApplyColor(Rgb),
    /// Snap the selection to the grid.
    SnapToGrid,
    /// Reset font, fill and outline of the selection.
    ResetElements,
    /// Insert a slide template.
    InsertTemplate(TemplateKind),
    /// Green-theme export notice.
    GreenPrint,
    /// List the key bindings.
    ShowQuickKeys,
}

impl Command {
    /// Every command with a fixed action, in help order.
    ///
    /// `ApplyColor` is left out since it has no sensible default colour; it
    /// is reachable as `"ApplyColor:#RRGGBB"`.
    pub const ALL: [Self; 30] = [
        Self::TextToAutoshape(ShapeKind::RoundRectangle),
        Self::TextToAutoshape(ShapeKind::Rectangle),
        Self::TextToAutoshape(ShapeKind::Ellipse),
        Self::TextToAutoshape(ShapeKind::Hexagon),
        Self::SplitJoinTextboxes,
        Self::MakeSameWidth,
        Self::Align(Alignment::Center),
        Self::Align(Alignment::Left),
        Self::Align(Alignment::Right),
        Self::Align(Alignment::Middle),
        Self::Align(Alignment::Top),
        Self::Align(Alignment::Bottom),
        Self::Distribute(Axis::Horizontal),
        Self::Distribute(Axis::Vertical),
        Self::InsertFootnote,
        Self::InsertLegend,
        Self::InsertSticker,
        Self::InsertTextBox(TextRole::Title),
        Self::InsertTextBox(TextRole::Subtitle),
        Self::InsertTextBox(TextRole::Body),
        Self::InsertTextBox(TextRole::Caption),
        Self::InsertTextBox(TextRole::Footnote),
        Self::CycleAccentColors,
        Self::ApplyBrandColors { start: 0 },
        Self::SnapToGrid,
        Self::ResetElements,
        Self::InsertTemplate(TemplateKind::Content),
        Self::InsertTemplate(TemplateKind::Chart),
        Self::GreenPrint,
        Self::ShowQuickKeys,
    ];

    /// Action id, e.g. `"AlignLeft"`. Parameters are not part of the id;
    /// see [`Command::action`].
    pub const fn id(self) -> &'static str {
        match self {
            Self::TextToAutoshape(ShapeKind::TextBox | ShapeKind::RoundRectangle) => "TextToAutoshape",
            Self::TextToAutoshape(ShapeKind::Rectangle) => "TextToRectangle",
            Self::TextToAutoshape(ShapeKind::Ellipse) => "TextToEllipse",
            Self::TextToAutoshape(ShapeKind::Hexagon) => "TextToHexagon",
            Self::SplitJoinTextboxes => "SplitJoinTextboxes",
            Self::MakeSameWidth => "MakeSameWidth",
            Self::Align(Alignment::Left) => "AlignLeft",
            Self::Align(Alignment::Right) => "AlignRight",
            Self::Align(Alignment::Center) => "AlignCenter",
            Self::Align(Alignment::Top) => "AlignTop",
            Self::Align(Alignment::Bottom) => "AlignBottom",
            Self::Align(Alignment::Middle) => "AlignMiddle",
            Self::Distribute(Axis::Horizontal) => "DistributeHorizontally",
            Self::Distribute(Axis::Vertical) => "DistributeVertically",
            Self::InsertFootnote => "InsertFootnote",
            Self::InsertLegend => "InsertLegend",
            Self::InsertSticker => "InsertSticker",
            Self::InsertTextBox(TextRole::Title) => "InsertTitle",
            Self::InsertTextBox(TextRole::Subtitle) => "InsertSubtitle",
            Self::InsertTextBox(TextRole::Body) => "InsertBodyText",
            Self::InsertTextBox(TextRole::Caption) => "InsertCaption",
            Self::InsertTextBox(TextRole::Footnote) => "InsertFootnoteText",
            Self::CycleAccentColors => "CycleAccentColors",
            Self::ApplyBrandColors { .. } => "ApplyBrandColors",
            Self::ApplyColor(_) => "ApplyColor",
            Self::SnapToGrid => "SnapToGrid",
            Self::ResetElements => "ResetElements",
            Self::InsertTemplate(TemplateKind::Content) => "InsertContentTemplate",
            Self::InsertTemplate(TemplateKind::Chart) => "InsertChartTemplate",
            Self::GreenPrint => "GreenPrint",
            Self::ShowQuickKeys => "ShowQuickKeys",
        }
    }

    /// Action string accepted by [`FromStr`]: the id, plus `:<arg>` for
    /// `ApplyBrandColors` with a non-zero start and for `ApplyColor`.
    pub fn action(self) -> String {
        match self {
            Self::ApplyBrandColors { start } if start != 0 => format!("{}:{start}", self.id()),
            Self::ApplyColor(colour) => format!("{}:{colour}", self.id()),
            other => other.id().to_string(),
        }
    }

    /// Short description used in the quick-keys listing.
    pub const fn description(self) -> &'static str {
        match self {
            Self::TextToAutoshape(ShapeKind::TextBox | ShapeKind::RoundRectangle) => "Text to autoshape",
            Self::TextToAutoshape(ShapeKind::Rectangle) => "Text to rectangle",
            Self::TextToAutoshape(ShapeKind::Ellipse) => "Text to ellipse",
            Self::TextToAutoshape(ShapeKind::Hexagon) => "Text to hexagon",
            Self::SplitJoinTextboxes => "Split/join textboxes",
            Self::MakeSameWidth => "Make same width",
            Self::Align(Alignment::Left) => "Align left",
            Self::Align(Alignment::Right) => "Align right",
            Self::Align(Alignment::Center) => "Align center",
            Self::Align(Alignment::Top) => "Align top",
            Self::Align(Alignment::Bottom) => "Align bottom",
            Self::Align(Alignment::Middle) => "Align middle",
            Self::Distribute(Axis::Horizontal) => "Distribute horizontally",
            Self::Distribute(Axis::Vertical) => "Distribute vertically",
            Self::InsertFootnote => "Insert footnote",
            Self::InsertLegend => "Insert legend",
            Self::InsertSticker => "Insert sticker",
            Self::InsertTextBox(TextRole::Title) => "Insert title",
            Self::InsertTextBox(TextRole::Subtitle) => "Insert subtitle",
            Self::InsertTextBox(TextRole::Body) => "Insert body text",
            Self::InsertTextBox(TextRole::Caption) => "Insert caption",
            Self::InsertTextBox(TextRole::Footnote) => "Insert footnote text",
            Self::CycleAccentColors => "Cycle accent colors",
            Self::ApplyBrandColors { .. } => "Apply brand colors",
            Self::ApplyColor(_) => "Apply color",
            Self::SnapToGrid => "Snap to grid",
            Self::ResetElements => "Reset elements",
            Self::InsertTemplate(TemplateKind::Content) => "Insert content template",
            Self::InsertTemplate(TemplateKind::Chart) => "Insert chart template",
            Self::GreenPrint => "Green print",
            Self::ShowQuickKeys => "Show quick keys",
        }
    }

    /// Phrase completing "Could not ...", used in error notifications.
    pub fn failure_phrase(self) -> String {
        match self {
            Self::Align(a) => format!("align objects to {}", a.name()),
            Self::Distribute(Axis::Horizontal) => "distribute objects horizontally".to_string(),
            Self::Distribute(Axis::Vertical) => "distribute objects vertically".to_string(),
            Self::MakeSameWidth => "make objects same width".to_string(),
            other => other.description().to_lowercase(),
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Parse an action string: `"AlignLeft"`, `"ApplyBrandColors:2"`,
    /// `"ApplyColor:#00A651"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (id, arg) = match s.split_once(':') {
            Some((id, arg)) => (id.trim(), Some(arg.trim())),
            None => (s, None),
        };

        match (id, arg) {
            ("ApplyBrandColors", Some(start)) => start
                .parse()
                .map(|start| Self::ApplyBrandColors { start })
                .map_err(|e| Error::invalid(format!("bad palette start '{start}': {e}"))),
            ("ApplyColor", Some(colour)) => Ok(Self::ApplyColor(Rgb::from_hex(colour)?)),
            ("ApplyColor", None) => Err(Error::invalid("ApplyColor needs a colour, e.g. 'ApplyColor:#00A651'")),
            (_, Some(_)) => Err(Error::invalid(format!("command '{id}' takes no argument"))),
            (_, None) => Self::ALL
                .into_iter()
                .find(|c| c.id() == id)
                .ok_or_else(|| Error::invalid(format!("unknown command '{id}'"))),
        }
    }
}

/// Run `command` against `host` and report the outcome.
///
/// Errors are returned to the caller; the engine turns them into error
/// notifications.
pub fn execute<H: SlideHost + ?Sized>(command: Command, host: &mut H, config: &Config) -> Result<Notification> {
    log::debug!("executing {}", command.id());

    let notification = match command {
        Command::TextToAutoshape(kind) => text_to_autoshape(host, kind)?,
        Command::SplitJoinTextboxes => split_join(host)?,
        Command::MakeSameWidth => {
            let selection = host.selection()?;
            let frames = match_width(&frames_of(&selection));
            write_frames(host, &selection, &frames)?;
            Notification::info("Objects resized to same width")
        }
        Command::Align(target) => {
            let selection = host.selection()?;
            let frames = align_to(&frames_of(&selection), target, Some(config.canvas()?))?;
            write_frames(host, &selection, &frames)?;
            Notification::info(format!("Objects aligned to {}", target.name()))
        }
        Command::Distribute(axis) => {
            let selection = host.selection()?;
            let placed: Vec<(ShapeId, Rect)> = distribute_indexed(&frames_of(&selection), axis)
                .into_iter()
                .map(|(index, frame)| (selection[index].id, frame))
                .collect();
            log::debug!("distributed {} shapes along {axis:?}", placed.len());
            host.apply_frames(&placed)?;
            let direction = match axis {
                Axis::Horizontal => "horizontally",
                Axis::Vertical => "vertically",
            };
            Notification::info(format!("Objects distributed {direction}"))
        }
        Command::InsertFootnote => {
            host.add_shape(ElementSpec::footnote(config))?;
            Notification::info("Footnote inserted")
        }
        Command::InsertLegend => {
            host.add_shape(ElementSpec::legend(&DEFAULT_LEGEND_ITEMS, config))?;
            Notification::info("Legend inserted")
        }
        Command::InsertSticker => {
            let labels: Vec<String> = host
                .shapes()?
                .into_iter()
                .filter(|s| s.kind == ShapeKind::Ellipse && s.has_text())
                .filter_map(|s| s.text)
                .collect();
            let number = next_sticker_number(&labels);
            host.add_shape(ElementSpec::sticker(&number))?;
            Notification::info(format!("Sticker {number} inserted"))
        }
        Command::InsertTextBox(role) => {
            host.add_shape(ElementSpec::text_box(DEFAULT_TEXT_BOX_TEXT, role))?;
            Notification::info("Text box inserted")
        }
        Command::CycleAccentColors => {
            let selection = host.selection()?;
            let colours = palette_run(0, selection.len(), &config.accent_palette)?;
            fill_each(host, &selection, &colours)?;
            Notification::info("Accent colors cycled")
        }
        Command::ApplyBrandColors { start } => {
            let selection = host.selection()?;
            let colours = palette_run(start, selection.len(), &config.brand_palette)?;
            fill_each(host, &selection, &colours)?;
            Notification::info("Brand colors applied")
        }
        Command::ApplyColor(colour) => {
            let selection = host.selection()?;
            fill_each(host, &selection, &vec![colour; selection.len()])?;
            Notification::info(format!("Color {colour} applied"))
        }
        Command::SnapToGrid => {
            let selection = host.selection()?;
            let frames = frames_of(&selection)
                .into_iter()
                .map(|frame| snap_to_grid(frame, config.grid_size))
                .collect::<Result<Vec<Rect>>>()?;
            write_frames(host, &selection, &frames)?;
            Notification::info("Objects snapped to grid")
        }
        Command::ResetElements => {
            let reset = Font::reset();
            for shape in host.selection()? {
                if shape.has_text() {
                    host.set_font(shape.id, &reset)?;
                }
                host.set_fill(shape.id, None)?;
                host.set_line(shape.id, LineFormat::default())?;
            }
            Notification::info("Elements reset to default formatting")
        }
        Command::InsertTemplate(kind) => {
            for spec in slide_template(kind, config) {
                host.add_shape(spec)?;
            }
            Notification::info("Slide template inserted")
        }
        Command::GreenPrint => {
            Notification::info("Green Print would export the presentation with the green theme applied")
                .with_duration(Duration::from_secs(5))
        }
        Command::ShowQuickKeys => {
            Notification::info(Keymap::default().help_text()).with_duration(Duration::from_secs(10))
        }
    };

    host.sync()?;
    Ok(notification)
}

/// Fill `shapes` with `colours`, pairing by position. Colours are resolved
/// before the first write.
fn fill_each<H: SlideHost + ?Sized>(host: &mut H, shapes: &[Shape], colours: &[Rgb]) -> Result<()> {
    for (shape, colour) in shapes.iter().zip(colours) {
        host.set_fill(shape.id, Some(*colour))?;
    }
    Ok(())
}

fn frames_of(shapes: &[Shape]) -> Vec<Rect> {
    shapes.iter().map(|s| s.frame).collect()
}

/// Write `frames` back onto `shapes`, pairing by position.
fn write_frames<H: SlideHost + ?Sized>(host: &mut H, shapes: &[Shape], frames: &[Rect]) -> Result<()> {
    let placed: Vec<(ShapeId, Rect)> = shapes
        .iter()
        .zip(frames)
        .filter(|(shape, frame)| shape.frame != **frame)
        .map(|(shape, frame)| (shape.id, *frame))
        .collect();
    log::debug!("moving {} of {} shapes", placed.len(), shapes.len());
    host.apply_frames(&placed)
}

fn text_to_autoshape<H: SlideHost + ?Sized>(host: &mut H, kind: ShapeKind) -> Result<Notification> {
    let Some(source) = host.selection()?.into_iter().find(Shape::has_text) else {
        return Ok(Notification::warning("Select text to convert first"));
    };
    let text = source.text.unwrap_or_default();
    host.add_shape(ElementSpec::autoshape_for_text(&text, kind))?;
    host.set_text(source.id, "")?;
    Ok(Notification::info("Text converted to autoshape"))
}

fn split_join<H: SlideHost + ?Sized>(host: &mut H) -> Result<Notification> {
    let boxes: Vec<Shape> = host.selection()?.into_iter().filter(Shape::has_text).collect();
    match boxes.as_slice() {
        [single] => {
            let (first, second) = split_text(single.text.as_deref().unwrap_or_default());
            host.set_text(single.id, &first)?;
            host.add_shape(ElementSpec::split_companion(single.frame, &second))?;
            Ok(Notification::info("Textbox split"))
        }
        [keep, merged] => {
            let text = join_text(
                keep.text.as_deref().unwrap_or_default(),
                merged.text.as_deref().unwrap_or_default(),
            );
            host.set_text(keep.id, &text)?;
            host.delete_shape(merged.id)?;
            Ok(Notification::info("Textboxes joined"))
        }
        _ => Ok(Notification::warning("Select one textbox to split or two to join")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::notify::Severity;

    fn host_with(frames: &[Rect]) -> (MemoryHost, Vec<ShapeId>) {
        let mut host = MemoryHost::new();
        let ids: Vec<ShapeId> = frames
            .iter()
            .map(|&f| host.insert(ShapeKind::Rectangle, f))
            .collect();
        host.select(&ids);
        (host, ids)
    }

    fn frame(host: &MemoryHost, id: ShapeId) -> Rect {
        host.get(id).unwrap().frame
    }

    #[test]
    fn test_align_left_writes_back() {
        let (mut host, ids) = host_with(&[Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(50.0, 0.0, 20.0, 10.0)]);
        let n = execute(Command::Align(Alignment::Left), &mut host, &Config::default()).unwrap();

        assert_eq!(n.message, "Objects aligned to left");
        assert_eq!(frame(&host, ids[1]).left, 0.0);
        assert_eq!(host.sync_count(), 1);
    }

    #[test]
    fn test_align_center_uses_canvas() {
        let (mut host, ids) = host_with(&[Rect::new(0.0, 0.0, 100.0, 10.0)]);
        execute(Command::Align(Alignment::Center), &mut host, &Config::default()).unwrap();
        assert_eq!(frame(&host, ids[0]).left, 310.0);
    }

    #[test]
    fn test_distribute_maps_back_to_shapes() {
        let (mut host, ids) = host_with(&[
            Rect::new(100.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(40.0, 0.0, 10.0, 10.0),
        ]);
        execute(Command::Distribute(Axis::Horizontal), &mut host, &Config::default()).unwrap();

        assert_eq!(frame(&host, ids[0]).left, 100.0);
        assert_eq!(frame(&host, ids[1]).left, 0.0);
        assert_eq!(frame(&host, ids[2]).left, 55.0);
    }

    #[test]
    fn test_make_same_width() {
        let (mut host, ids) = host_with(&[Rect::new(0.0, 0.0, 80.0, 10.0), Rect::new(0.0, 20.0, 20.0, 10.0)]);
        execute(Command::MakeSameWidth, &mut host, &Config::default()).unwrap();
        assert_eq!(frame(&host, ids[1]).width, 80.0);
    }

    #[test]
    fn test_insert_sticker_numbers_sequentially() {
        let mut host = MemoryHost::new();
        host.insert_text(ShapeKind::Ellipse, Rect::ZERO, "2");
        host.insert_text(ShapeKind::Rectangle, Rect::ZERO, "9");
        let config = Config::default();

        let n = execute(Command::InsertSticker, &mut host, &config).unwrap();
        assert_eq!(n.message, "Sticker 3 inserted");
        execute(Command::InsertSticker, &mut host, &config).unwrap();

        let labels: Vec<String> = host
            .shapes()
            .unwrap()
            .into_iter()
            .filter(|s| s.kind == ShapeKind::Ellipse)
            .filter_map(|s| s.text)
            .collect();
        assert_eq!(labels, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_cycle_accent_colors() {
        let (mut host, ids) = host_with(&[Rect::ZERO; 6]);
        execute(Command::CycleAccentColors, &mut host, &Config::default()).unwrap();

        assert_eq!(host.get(ids[0]).unwrap().fill, Some(Rgb::from_u32(0x00A651)));
        assert_eq!(host.get(ids[5]).unwrap().fill, Some(Rgb::from_u32(0x00A651)));
        assert_eq!(host.get(ids[1]).unwrap().fill, Some(Rgb::from_u32(0x0073E6)));
    }

    #[test]
    fn test_cycle_accent_colors_empty_palette() {
        let (mut host, _) = host_with(&[Rect::ZERO]);
        let config = Config { accent_palette: Vec::new(), ..Config::default() };
        let result = execute(Command::CycleAccentColors, &mut host, &config);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_apply_brand_colors_from_start() {
        let (mut host, ids) = host_with(&[Rect::ZERO; 2]);
        execute(Command::ApplyBrandColors { start: 4 }, &mut host, &Config::default()).unwrap();
        assert_eq!(host.get(ids[0]).unwrap().fill, Some(Rgb::from_u32(0xF39C12)));
        assert_eq!(host.get(ids[1]).unwrap().fill, Some(Rgb::from_u32(0x0078D4)));
    }

    #[test]
    fn test_snap_to_grid_command() {
        let (mut host, ids) = host_with(&[Rect::new(29.0, 31.0, 95.0, 41.0)]);
        execute(Command::SnapToGrid, &mut host, &Config::default()).unwrap();
        assert_eq!(frame(&host, ids[0]), Rect::new(20.0, 40.0, 100.0, 40.0));
    }

    #[test]
    fn test_split_and_join() {
        let mut host = MemoryHost::new();
        let id = host.insert_text(ShapeKind::TextBox, Rect::new(0.0, 0.0, 100.0, 20.0), "abcdef");
        host.select(&[id]);
        let config = Config::default();

        execute(Command::SplitJoinTextboxes, &mut host, &config).unwrap();
        assert_eq!(host.len(), 2);
        assert_eq!(host.get(id).unwrap().text.as_deref(), Some("abc"));
        let companion = host.shapes().unwrap()[1].clone();
        assert_eq!(companion.text.as_deref(), Some("def"));
        assert_eq!(companion.frame.left, 110.0);

        host.select(&[id, companion.id]);
        let n = execute(Command::SplitJoinTextboxes, &mut host, &config).unwrap();
        assert_eq!(n.message, "Textboxes joined");
        assert_eq!(host.len(), 1);
        assert_eq!(host.get(id).unwrap().text.as_deref(), Some("abc def"));
    }

    #[test]
    fn test_split_join_needs_text() {
        let (mut host, _) = host_with(&[Rect::ZERO]);
        let n = execute(Command::SplitJoinTextboxes, &mut host, &Config::default()).unwrap();
        assert_eq!(n.severity, Severity::Warning);
    }

    #[test]
    fn test_text_to_autoshape() {
        let mut host = MemoryHost::new();
        let id = host.insert_text(ShapeKind::TextBox, Rect::ZERO, "Key insight");
        host.select(&[id]);

        execute(Command::TextToAutoshape(ShapeKind::RoundRectangle), &mut host, &Config::default()).unwrap();
        let shapes = host.shapes().unwrap();
        assert_eq!(shapes[0].text.as_deref(), Some(""));
        assert_eq!(shapes[1].kind, ShapeKind::RoundRectangle);
        assert_eq!(shapes[1].text.as_deref(), Some("Key insight"));
    }

    #[test]
    fn test_text_to_hexagon() {
        let mut host = MemoryHost::new();
        let id = host.insert_text(ShapeKind::TextBox, Rect::ZERO, "Step 1");
        host.select(&[id]);

        execute("TextToHexagon".parse().unwrap(), &mut host, &Config::default()).unwrap();
        assert_eq!(host.shapes().unwrap()[1].kind, ShapeKind::Hexagon);
    }

    #[test]
    fn test_insert_text_box_for_role() {
        let mut host = MemoryHost::new();
        let n = execute(Command::InsertTextBox(TextRole::Caption), &mut host, &Config::default()).unwrap();

        assert_eq!(n.message, "Text box inserted");
        let shape = &host.shapes().unwrap()[0];
        assert_eq!(shape.kind, ShapeKind::TextBox);
        assert_eq!(shape.font, Font::for_role(TextRole::Caption));
    }

    #[test]
    fn test_apply_color() {
        let (mut host, ids) = host_with(&[Rect::ZERO; 3]);
        let colour = Rgb::from_u32(0x0073E6);
        let n = execute(Command::ApplyColor(colour), &mut host, &Config::default()).unwrap();

        assert_eq!(n.message, "Color #0073E6 applied");
        assert!(ids.iter().all(|&id| host.get(id).unwrap().fill == Some(colour)));
        assert_eq!(host.sync_count(), 1);
    }

    #[test]
    fn test_palette_failure_leaves_shapes_untouched() {
        let (mut host, ids) = host_with(&[Rect::ZERO; 2]);
        let config = Config { brand_palette: Vec::new(), ..Config::default() };

        assert!(execute(Command::ApplyBrandColors { start: 1 }, &mut host, &config).is_err());
        assert!(ids.iter().all(|&id| host.get(id).unwrap().fill == Some(Rgb::WHITE)));
        assert_eq!(host.sync_count(), 0);
    }

    #[test]
    fn test_reset_elements() {
        let mut host = MemoryHost::new();
        let id = host.insert_text(ShapeKind::TextBox, Rect::ZERO, "x");
        host.set_font(id, &Font::new("Arial", 40.0, Rgb::WHITE)).unwrap();
        host.select(&[id]);

        execute(Command::ResetElements, &mut host, &Config::default()).unwrap();
        let shape = host.get(id).unwrap();
        assert_eq!(shape.font, Font::reset());
        assert_eq!(shape.fill, None);
        assert_eq!(shape.line, LineFormat::default());
    }

    #[test]
    fn test_insert_elements() {
        let mut host = MemoryHost::new();
        let config = Config::default();
        execute(Command::InsertFootnote, &mut host, &config).unwrap();
        execute(Command::InsertLegend, &mut host, &config).unwrap();
        execute(Command::InsertTemplate(TemplateKind::Chart), &mut host, &config).unwrap();
        assert_eq!(host.len(), 5);
        assert_eq!(host.sync_count(), 3);
    }

    #[test]
    fn test_quick_keys_lists_bindings() {
        let mut host = MemoryHost::new();
        let n = execute(Command::ShowQuickKeys, &mut host, &Config::default()).unwrap();
        assert!(n.message.contains("Ctrl+Alt+L"));
        assert_eq!(n.duration, Duration::from_secs(10));
    }

    #[test]
    fn test_command_actions_round_trip() {
        let extra = [
            Command::ApplyBrandColors { start: 3 },
            Command::ApplyColor(Rgb::from_u32(0x8E44AD)),
        ];
        for command in Command::ALL.into_iter().chain(extra) {
            assert_eq!(command.action().parse::<Command>().unwrap(), command, "{}", command.action());
        }
        assert_eq!(Command::ApplyBrandColors { start: 3 }.action(), "ApplyBrandColors:3");
        assert_eq!(
            "ApplyBrandColors".parse::<Command>().unwrap(),
            Command::ApplyBrandColors { start: 0 }
        );
    }

    #[test]
    fn test_command_parse_errors() {
        for bad in ["PasteUnformatted", "ApplyColor", "ApplyColor:nope", "ApplyBrandColors:-1", "AlignLeft:2"] {
            assert!(matches!(bad.parse::<Command>(), Err(Error::InvalidArgument(_))), "{bad}");
        }
    }
}
