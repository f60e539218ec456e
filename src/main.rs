use anyhow::*;
use std::env;

use course_viewer::course::{CourseFilter, FilterOptions};
use course_viewer::search::SearchResults;
use course_viewer::source::DiskSource;
use course_viewer::{ChapterView, CourseViewer, Settings};

fn print_chapter(view: &ChapterView) {
    println!("# {}", view.chapter.title);
    if let Some(description) = &view.chapter.description {
        println!("{}", description);
    }
    for subtopic in &view.chapter.subtopics {
        match view.quiz_for(&subtopic.id) {
            Some(questions) => println!("  - {} ({} questions)", subtopic.title, questions.len()),
            None => println!("  - {}", subtopic.title),
        }
    }
}

fn print_catalog(viewer: &CourseViewer<DiskSource>) {
    let options = FilterOptions::collect(viewer.catalog());
    println!("Categories: {}", options.categories.join(", "));
    for course in CourseFilter::default().apply(viewer.catalog()) {
        println!("{}\t{}\t{}", course.id, course.title, course.estimated_time);
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut settings = Settings::from_env();
    let mut args = env::args().skip(1);
    if let Some(root) = args.next() {
        settings.content_root = root.into();
    }
    let course_id = args.next();
    let query = args.collect::<Vec<String>>().join(" ");

    let source = DiskSource::from_settings(&settings);
    let mut viewer = CourseViewer::new(source, &settings);
    viewer
        .load_catalog()
        .with_context(|| format!("Could not read catalog under {:?}", settings.content_root))?;

    let course_id = match course_id {
        Some(course_id) => course_id,
        None => {
            print_catalog(&viewer);
            return Ok(());
        }
    };

    let chapter_ids: Vec<String> = viewer
        .load_course(&course_id)
        .with_context(|| format!("Could not open course {}", course_id))?
        .structure
        .chapters
        .iter()
        .map(|c| c.id.clone())
        .collect();

    if query.trim().is_empty() {
        match viewer.load_default_chapter()? {
            Some(view) => print_chapter(&view),
            None => println!("Course {} has no chapters yet", course_id),
        }
        return Ok(());
    }

    for chapter_id in &chapter_ids {
        if let Err(e) = viewer.load_chapter(chapter_id) {
            log::error!("{:#}", anyhow::Error::new(e));
        }
    }
    match viewer.search(&query) {
        SearchResults::Inactive => (),
        SearchResults::Active(hits) if hits.is_empty() => println!("No results found"),
        SearchResults::Active(hits) => {
            for hit in hits {
                println!("[{:?}] {} ({})\n    {}", hit.kind, hit.title, hit.chapter_id, hit.preview);
            }
        }
    }
    Ok(())
}
