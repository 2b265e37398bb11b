//! Path building and representation
//!
//! Shape helpers emit toolkit-independent command lists; the rendering layer
//! translates them into its own path type.

use smallvec::SmallVec;

use crate::geometry::Point;

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every point referenced by a move or line command
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        })
    }

    /// Split the path into its subpaths, one vertex list per `MoveTo`
    pub fn polygons(&self) -> Vec<Vec<Point>> {
        let mut polygons: Vec<Vec<Point>> = Vec::new();
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => polygons.push(vec![*p]),
                PathCommand::LineTo(p) => match polygons.last_mut() {
                    Some(current) => current.push(*p),
                    None => polygons.push(vec![*p]),
                },
                PathCommand::Close => {}
            }
        }
        polygons
    }
}

/// Builder for constructing paths
#[derive(Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path
            .commands
            .push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path
            .commands
            .push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    /// Append a closed polygon; fewer than three points is a no-op
    pub fn polygon(self, points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };
        if rest.len() < 2 {
            return self;
        }
        let builder = rest
            .iter()
            .fold(self.move_to(first.x, first.y), |b, p| b.line_to(p.x, p.y));
        builder.close()
    }

    pub fn build(self) -> Path {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_emits_closed_subpath() {
        let path = PathBuilder::new()
            .polygon(&[
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
            ])
            .build();

        assert_eq!(path.commands().len(), 4);
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
        assert_eq!(path.polygons().len(), 1);
        assert_eq!(path.polygons()[0].len(), 3);
    }

    #[test]
    fn degenerate_polygon_is_skipped() {
        let path = PathBuilder::new()
            .polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .build();
        assert!(path.is_empty());
    }
}
