//! Cabinet layout: drawer heights and centres, folder resting slots and tab
//! placement, all derived once from [`LayoutOptions`].

use std::fmt;

use glam::Vec3;

use crate::options::{ColorOptions, LayoutOptions};

/// Identifies a folder by its drawer and slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    /// Drawer (container) index, bottom drawer is 0.
    pub drawer: usize,
    /// Slot within the drawer, front slot is 0.
    pub slot: usize,
}

impl ItemId {
    /// Folder `slot` in drawer `drawer`.
    #[must_use]
    pub fn new(drawer: usize, slot: usize) -> Self {
        Self { drawer, slot }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}-f{}", self.drawer, self.slot)
    }
}

/// Static description of one drawer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerSpec {
    /// Drawer index, bottom drawer is 0.
    pub index: usize,
    /// Closed position of the drawer front centre.
    pub origin: Vec3,
    /// Drawer body width.
    pub width: f32,
    /// Drawer body height.
    pub height: f32,
    /// Drawer body depth.
    pub depth: f32,
    /// Label text.
    pub label: String,
    /// Label plate color.
    pub label_color: [f32; 3],
}

/// Static description of one folder.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderSpec {
    /// Folder id.
    pub id: ItemId,
    /// Resting position relative to the drawer origin.
    pub rest: Vec3,
    /// Horizontal offset of the tab along the folder top edge.
    pub tab_offset: f32,
}

/// Derived cabinet geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinetLayout {
    drawers: Vec<DrawerSpec>,
    folders: Vec<FolderSpec>,
}

impl CabinetLayout {
    /// Lay out drawers (bottom to top) and their folders.
    ///
    /// Drawers split the front opening evenly between the paddings, with a
    /// separator between neighbours. Folders are spread along the drawer
    /// depth, front to back.
    #[must_use]
    pub fn new(layout: &LayoutOptions, colors: &ColorOptions) -> Self {
        let count = layout.drawer_labels.len();
        let drawer_height = drawer_height(layout, count);
        let drawer_width =
            (layout.cabinet_width - 2.0 * layout.panel_thickness).max(0.0);

        let drawers: Vec<DrawerSpec> = layout
            .drawer_labels
            .iter()
            .enumerate()
            .map(|(i, label)| DrawerSpec {
                index: i,
                origin: Vec3::new(
                    0.0,
                    layout.bottom_padding
                        + drawer_height / 2.0
                        + i as f32 * (drawer_height + layout.separator_height),
                    0.0,
                ),
                width: drawer_width,
                height: drawer_height,
                depth: layout.drawer_depth,
                label: label.clone(),
                label_color: colors.label_color(i),
            })
            .collect();

        let n = layout.folders_per_drawer;
        let folders = drawers
            .iter()
            .flat_map(|drawer| {
                (0..n).map(move |slot| FolderSpec {
                    id: ItemId::new(drawer.index, slot),
                    rest: Vec3::new(
                        0.0,
                        0.0,
                        -drawer.depth * (slot + 1) as f32 / (n + 1) as f32,
                    ),
                    tab_offset: tab_offset(slot, n, layout.folder_width),
                })
            })
            .collect();

        Self { drawers, folders }
    }

    /// All drawers, bottom to top.
    #[must_use]
    pub fn drawers(&self) -> &[DrawerSpec] {
        &self.drawers
    }

    /// All folders, grouped by drawer.
    #[must_use]
    pub fn folders(&self) -> &[FolderSpec] {
        &self.folders
    }

    /// Drawer by index.
    #[must_use]
    pub fn drawer(&self, index: usize) -> Option<&DrawerSpec> {
        self.drawers.get(index)
    }

    /// Folder by id.
    #[must_use]
    pub fn folder(&self, id: ItemId) -> Option<&FolderSpec> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Number of drawers.
    #[must_use]
    pub fn drawer_count(&self) -> usize {
        self.drawers.len()
    }

    /// Centre heights of every drawer, bottom to top.
    #[must_use]
    pub fn drawer_heights(&self) -> Vec<f32> {
        self.drawers.iter().map(|d| d.origin.y).collect()
    }
}

/// Height of each drawer so `count` drawers plus separators fill the front.
fn drawer_height(layout: &LayoutOptions, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let separators = (count - 1) as f32 * layout.separator_height;
    let free = layout.cabinet_height
        - layout.bottom_padding
        - layout.top_padding
        - separators;
    (free / count as f32).max(0.0)
}

/// Tab x offset for folder `index` of `total`: spread edge to edge so tabs
/// never overhang. A single folder keeps its tab centred.
#[must_use]
pub fn tab_offset(index: usize, total: usize, folder_width: f32) -> f32 {
    if total <= 1 {
        return 0.0;
    }
    let tab_width = folder_width * 0.4;
    let start = -folder_width / 2.0 + tab_width / 2.0;
    let end = folder_width / 2.0 - tab_width / 2.0;
    let t = index as f32 / (total - 1) as f32;
    start + t * (end - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CabinetLayout {
        CabinetLayout::new(&LayoutOptions::default(), &ColorOptions::default())
    }

    #[test]
    fn three_drawers_fill_the_front() {
        let layout = layout();
        assert_eq!(layout.drawer_count(), 3);
        let h = (1.5 - 0.1 - 0.05 - 2.0 * 0.02) / 3.0;
        let ys = layout.drawer_heights();
        assert!((ys[0] - (0.1 + h / 2.0)).abs() < 1e-6);
        assert!((ys[1] - (0.1 + h / 2.0 + h + 0.02)).abs() < 1e-6);
        assert!((layout.drawers()[2].height - h).abs() < 1e-6);
        assert_eq!(layout.drawers()[0].label, "Misc.");
        assert!((layout.drawers()[0].width - 0.7).abs() < 1e-6);
    }

    #[test]
    fn folders_sit_inside_their_drawer() {
        let layout = layout();
        assert_eq!(layout.folders().len(), 9);
        for folder in layout.folders() {
            assert!(folder.rest.z < 0.0);
            assert!(folder.rest.z > -0.6);
        }
        let front = layout.folder(ItemId::new(1, 0)).unwrap();
        let back = layout.folder(ItemId::new(1, 2)).unwrap();
        assert!(front.rest.z > back.rest.z);
        assert!(layout.folder(ItemId::new(5, 0)).is_none());
    }

    #[test]
    fn tab_offsets_span_the_folder() {
        assert_eq!(tab_offset(0, 1, 0.6), 0.0);
        assert!((tab_offset(0, 3, 0.6) + 0.18).abs() < 1e-6);
        assert!(tab_offset(1, 3, 0.6).abs() < 1e-6);
        assert!((tab_offset(2, 3, 0.6) - 0.18).abs() < 1e-6);
    }

    #[test]
    fn label_colors_follow_index() {
        let layout = layout();
        let colors = ColorOptions::default();
        for drawer in layout.drawers() {
            assert_eq!(drawer.label_color, colors.label_color(drawer.index));
        }
    }

    #[test]
    fn item_id_display() {
        assert_eq!(ItemId::new(2, 1).to_string(), "d2-f1");
    }
}
