#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    Sierpinski,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::Sierpinski];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::Sierpinski => "Sierpinski",
        }
    }
}
