use timecarve_core::{FracRange, Section, Segment, Session};

use super::OutputOpts;

/// The classic two-section seed: an intro with a fade and a title, then the
/// main content with one segment.
pub fn demo_session() -> Session {
    let mut intro = Section::new("Intro", FracRange::new(0.0, 0.25));
    intro
        .segments
        .push(Segment::new("Fade In", FracRange::new(0.0, 0.2)));
    intro
        .segments
        .push(Segment::new("Title", FracRange::new(0.2, 1.0)));

    let mut main = Section::new("Main Content", FracRange::new(0.25, 0.8));
    main.segments
        .push(Segment::new("Part A", FracRange::new(0.0, 0.5)));

    let mut session = Session::new(60.0);
    session.sections.push(intro);
    session.sections.push(main);
    session
}

pub fn run(output: &OutputOpts) -> Result<(), Box<dyn std::error::Error>> {
    let session = demo_session();
    super::emit(&session, output)
}
