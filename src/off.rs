use crate::{
    bail, CornerRef, Face, LineError, Model, ModelParser, ParseOptions, Point3, TokenCountError,
    VertexIndex,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expecting the `OFF` magic or, without it, the counts line.
    #[default]
    Magic,
    Counts,
    Vertices {
        left: usize,
        faces: usize,
    },
    Faces {
        left: usize,
    },
    Done,
}

/// Parser for Object File Format meshes.
///
/// Counts come first, then `V` vertex lines, then `F` face lines of the form
/// `n i j k ...`. Indices are 0-based in the file and stored 1-based.
#[derive(Debug, Default, Clone)]
pub struct OffParser {
    model: Model,
    state: State,
    options: ParseOptions,
}

impl OffParser {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }
    pub fn into_model(self) -> Model {
        self.model
    }
    fn parse_counts<'a>(&mut self, tokens: impl Iterator<Item = &'a str>) -> Result<(), LineError> {
        let counts = tokens
            .take(2)
            .map(|token| token.parse().map_err(|_| LineError::malformed(token)))
            .collect::<Result<Vec<usize>, _>>()?;

        let [vertices, faces] = counts[..] else {
            bail!(TokenCountError::new(2, counts.len()));
        };

        self.state = State::Vertices {
            left: vertices,
            faces,
        };
        self.settle();
        Ok(())
    }
    /// Skips sections with nothing left to read.
    fn settle(&mut self) {
        loop {
            self.state = match self.state {
                State::Vertices { left: 0, faces } => State::Faces { left: faces },
                State::Faces { left: 0 } => State::Done,
                _ => return,
            };
        }
    }
    fn parse_face<'a>(&self, mut tokens: impl Iterator<Item = &'a str>) -> Result<Face, LineError> {
        let count = tokens.next().ok_or(TokenCountError::new(1, 0))?;
        let count: usize = count.parse().map_err(|_| LineError::malformed(count))?;
        self.options
            .face_policy
            .check(3, count, "face is not a triangle")?;

        let mut corners = [CornerRef::default(); 3];
        for (corner, token) in corners.iter_mut().zip(tokens.take(count)) {
            let index = token
                .parse::<VertexIndex>()
                .map_err(|_| LineError::malformed(token))?;
            corner.position = Some(index + 1);
        }

        let [a, b, c] = corners;
        Ok(Face::new(a, b, c))
    }
}

impl ModelParser for OffParser {
    fn model(&self) -> &Model {
        &self.model
    }
    fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }
    fn parse_line(&mut self, line: &str) -> Result<(), LineError> {
        let mut tokens = line.split_whitespace().peekable();
        match tokens.peek() {
            Some(token) if !token.starts_with('#') => {}
            _ => return Ok(()),
        }

        match self.state {
            State::Magic => {
                // `OFF` may carry the counts on the same line.
                if tokens.next_if_eq(&"OFF").is_none() {
                    return self.parse_counts(tokens);
                }
                self.state = State::Counts;
                if tokens.peek().is_some() {
                    self.parse_counts(tokens)?;
                }
            }
            State::Counts => self.parse_counts(tokens)?,
            State::Vertices { left, faces } => {
                self.add_vertex(Point3::from_tokens(tokens)?);
                self.state = State::Vertices {
                    left: left - 1,
                    faces,
                };
                self.settle();
            }
            State::Faces { left } => {
                let face = self.parse_face(tokens)?;
                self.add_face(face);
                self.state = State::Faces { left: left - 1 };
                self.settle();
            }
            State::Done => tracing::trace!("ignoring line after last face"),
        }

        Ok(())
    }
}
