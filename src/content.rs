//! Read-only site content: the project list, placeholder imagery, hover
//! colors, and the showcase carousel media.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub image_id: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub video_url: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderImage {
    pub id: &'static str,
    pub image_url: &'static str,
    pub image_hint: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselItem {
    pub kind: MediaKind,
    pub src: &'static str,
}

/// The project with its own hand-built page.
pub const SHOWCASE_SLUG: &str = "white-rabbit";

pub const DEFAULT_HOVER_COLOR: &str = "#050505";

const NOI_UMANI_VIDEO: &str = concat!(
    "https://firebasestorage.googleapis.com/v0/b/ai-showcase-ce715.appspot.com/o/",
    "rabbit-compressed.mp4?alt=media&token=e11405e3-4613-433b-8255-08183183594b",
);

const SHOWCASE_VIDEO: &str = concat!(
    "https://firebasestorage.googleapis.com/v0/b/ai-showcase-ce715.appspot.com/o/",
    "WR-RP-Endurance_withsubtitle.mp4?alt=media&token=a3e3b3d1-4a4a-4e2a-9e1e-7f7f7f7f7f7f",
);

pub static PROJECTS: [Project; 5] = [
    Project {
        name: "White Rabbit",
        image_id: "ai-workflow",
        slug: "white-rabbit",
        description: "An AI-powered workflow automation tool.",
        video_url: None,
    },
    Project {
        name: "Nero Espresso",
        image_id: "graphic-design",
        slug: "nero-espresso",
        description: "Graphic design and branding for Nero Espresso.",
        video_url: None,
    },
    Project {
        name: "#CUOREDINAPOLI",
        image_id: "city-installation",
        slug: "cuoredinapoli",
        description: "A phygital art installation for the city of Naples.",
        video_url: None,
    },
    Project {
        name: "Noi Umani",
        image_id: "science-art",
        slug: "noi-umani",
        description: "A project blending science and art to tell human stories.",
        video_url: Some(NOI_UMANI_VIDEO),
    },
    Project {
        name: "Procida",
        image_id: "3d-scanning",
        slug: "procida",
        description: "3D scanning and digital preservation of cultural heritage in Procida.",
        video_url: None,
    },
];

pub static PLACEHOLDER_IMAGES: [PlaceholderImage; 5] = [
    PlaceholderImage {
        id: "ai-workflow",
        image_url: "/images/ai-workflow.jpg",
        image_hint: "ai workflow",
    },
    PlaceholderImage {
        id: "city-installation",
        image_url: "/images/city-installation.jpg",
        image_hint: "city installation",
    },
    PlaceholderImage {
        id: "graphic-design",
        image_url: "/images/graphic-design.jpg",
        image_hint: "graphic design",
    },
    PlaceholderImage {
        id: "science-art",
        image_url: "/images/science-art.jpg",
        image_hint: "science art",
    },
    PlaceholderImage {
        id: "3d-scanning",
        image_url: "/images/3d-scanning.jpg",
        image_hint: "3d scanning",
    },
];

static HOVER_COLORS: [(&str, &str); 5] = [
    ("White Rabbit", "#FFA500"),
    ("Nero Espresso", "#A71C1C"),
    ("#CUOREDINAPOLI", "#E74C3C"),
    ("Noi Umani", "#3498DB"),
    ("Procida", "#E85D9A"),
];

pub static CAROUSEL_ITEMS: [CarouselItem; 6] = [
    CarouselItem {
        kind: MediaKind::Video,
        src: SHOWCASE_VIDEO,
    },
    CarouselItem {
        kind: MediaKind::Image,
        src: "https://picsum.photos/seed/carousel-1/1600/900",
    },
    CarouselItem {
        kind: MediaKind::Image,
        src: "https://picsum.photos/seed/carousel-2/1600/900",
    },
    CarouselItem {
        kind: MediaKind::Image,
        src: "https://picsum.photos/seed/carousel-3/1600/900",
    },
    CarouselItem {
        kind: MediaKind::Image,
        src: "https://picsum.photos/seed/carousel-4/1600/900",
    },
    CarouselItem {
        kind: MediaKind::Image,
        src: "https://picsum.photos/seed/carousel-5/1600/900",
    },
];

pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

pub fn image_for(project: &Project) -> Option<&'static PlaceholderImage> {
    PLACEHOLDER_IMAGES.iter().find(|img| img.id == project.image_id)
}

/// Background color of a work-list row while hovered.
pub fn hover_color(project_name: &str) -> &'static str {
    HOVER_COLORS
        .iter()
        .find(|(name, _)| *name == project_name)
        .map_or(DEFAULT_HOVER_COLOR, |&(_, color)| color)
}

/// The project whose detail page carries no hero media.
pub const TEXT_ONLY_SLUG: &str = "nero-espresso";

/// What a detail page shows under its title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroMedia {
    Video(&'static str),
    Image(&'static PlaceholderImage),
    None,
}

/// A project's video wins over its image. The text-only project shows
/// neither unless it has a video.
pub fn hero_media(project: &'static Project) -> HeroMedia {
    if let Some(url) = project.video_url {
        return HeroMedia::Video(url);
    }
    match image_for(project) {
        Some(image) if project.slug != TEXT_ONLY_SLUG => HeroMedia::Image(image),
        _ => HeroMedia::None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Showcase,
    Detail {
        project: &'static Project,
        media: HeroMedia,
    },
    NotFound,
}

pub fn resolve_route(slug: &str) -> Route {
    if slug == SHOWCASE_SLUG {
        return Route::Showcase;
    }
    match find_project(slug) {
        Some(project) => Route::Detail {
            project,
            media: hero_media(project),
        },
        None => Route::NotFound,
    }
}

/// Slugs that get a generic detail page.
pub fn detail_slugs() -> impl Iterator<Item = &'static str> {
    PROJECTS
        .iter()
        .map(|p| p.slug)
        .filter(|slug| *slug != SHOWCASE_SLUG)
}
