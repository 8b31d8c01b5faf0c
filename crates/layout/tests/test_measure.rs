//! Properties of intrinsic measurement.

#[cfg(test)]
mod tests {
    use gitlive_layout::{
        Direction, Error, Node, Padding, Wrap,
        geom::{Axis, Expanse},
        measure::{min_extent, min_height, min_width},
    };
    use proptest::prelude::*;

    /// A block of `h` lines, each `w` characters wide.
    fn block(w: usize, h: usize) -> String {
        vec!["x".repeat(w); h].join("\n")
    }

    fn wrap_container(dir: Direction, blocks: &[(usize, usize)]) -> Node {
        let mut n = Node::default();
        n.with_direction(dir).with_wrap(Wrap::Wrap);
        for (w, h) in blocks {
            n.append_text(&block(*w, *h)).unwrap();
        }
        n
    }

    #[test]
    fn leaf_scenario() {
        let mut root = Node::default();
        let leaf = root.append_text("ab\ncde\n").unwrap();
        let b = Expanse::new(80, 24);
        assert_eq!(min_width(leaf, b), 3);
        assert_eq!(min_height(leaf, b), 2);
    }

    #[test]
    fn nested_padding() {
        let mut root = Node::default();
        let outer = root
            .append_child()
            .unwrap()
            .with_direction(Direction::Columns)
            .with_padding(Padding::sides(1, 1));
        outer.append_text("abc").unwrap();
        outer
            .append_child()
            .unwrap()
            .with_padding(Padding::uniform(1))
            .append_text("de\nf")
            .unwrap();
        let b = Expanse::new(80, 24);
        assert_eq!(min_width(&root.children()[0], b), 2 + 3 + 4);
        assert_eq!(min_height(&root.children()[0], b), 4);
    }

    #[test]
    fn exclusivity() {
        let mut root = Node::default();
        root.append_text("leaf").unwrap();
        let leaf = &mut root.children_mut()[0];
        assert!(matches!(leaf.append_child(), Err(Error::Invalid(_))));
        assert!(matches!(root.set_content("x"), Err(Error::Invalid(_))));
    }

    proptest! {
        #[test]
        fn leaf_lines(lines in prop::collection::vec("[a-z ]{1,12}", 1..6), trailing: bool) {
            let mut text = lines.join("\n");
            if trailing {
                text.push('\n');
            }
            let mut n = Node::default();
            n.set_content(&text).unwrap();
            let b = Expanse::unbounded();
            let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            prop_assert_eq!(min_height(&n, b) as usize, lines.len());
            prop_assert_eq!(min_width(&n, b) as usize, longest);
        }

        #[test]
        fn wrap_search_is_monotonic(
            dir in prop_oneof![Just(Direction::Columns), Just(Direction::Rows)],
            blocks in prop::collection::vec((1usize..6, 1usize..4), 1..8),
            main in 1u32..30,
            cross in 1u32..30,
            grow in 0u32..20,
        ) {
            let n = wrap_container(dir, &blocks);
            let axis = dir.axis();
            let at = |c: u32| {
                let b = Expanse::default().with_extent(axis, main).with_extent(axis.cross(), c);
                min_extent(&n, axis, b)
            };
            prop_assert!(at(cross + grow) <= at(cross));
        }

        #[test]
        fn wrap_cross_fits_one_line_when_wide(
            dir in prop_oneof![Just(Direction::Columns), Just(Direction::Rows)],
            blocks in prop::collection::vec((1usize..6, 1usize..4), 1..8),
        ) {
            let n = wrap_container(dir, &blocks);
            let axis = dir.axis();
            let tallest = blocks
                .iter()
                .map(|(w, h)| match axis.cross() {
                    Axis::Horizontal => *w as u32,
                    Axis::Vertical => *h as u32,
                })
                .max()
                .unwrap_or(0);
            prop_assert_eq!(min_extent(&n, axis.cross(), Expanse::unbounded()), tallest);
        }
    }
}
