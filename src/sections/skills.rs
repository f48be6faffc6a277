use crate::markup::{Markup, Node};
use crate::models::portfolio::{Portfolio, SkillGroup};
use crate::page::{ids, Page};

/// Technology name (lowercase) → devicon class.
const DEVICONS: &[(&str, &str)] = &[
    // Frontend
    ("react", "devicon-react-original"),
    ("next.js", "devicon-nextjs-plain"),
    ("nextjs", "devicon-nextjs-plain"),
    ("vue", "devicon-vuejs-plain"),
    ("vue.js", "devicon-vuejs-plain"),
    ("angular", "devicon-angularjs-plain"),
    ("javascript", "devicon-javascript-plain"),
    ("typescript", "devicon-typescript-plain"),
    ("html", "devicon-html5-plain"),
    ("html5", "devicon-html5-plain"),
    ("css", "devicon-css3-plain"),
    ("css3", "devicon-css3-plain"),
    ("sass", "devicon-sass-original"),
    ("scss", "devicon-sass-original"),
    ("tailwind", "devicon-tailwindcss-plain"),
    ("tailwind css", "devicon-tailwindcss-plain"),
    ("bootstrap", "devicon-bootstrap-plain"),
    // Backend
    ("node.js", "devicon-nodejs-plain"),
    ("nodejs", "devicon-nodejs-plain"),
    ("express", "devicon-express-original"),
    ("express.js", "devicon-express-original"),
    ("python", "devicon-python-plain"),
    ("django", "devicon-django-plain"),
    ("flask", "devicon-flask-original"),
    ("java", "devicon-java-plain"),
    ("spring", "devicon-spring-plain"),
    ("php", "devicon-php-plain"),
    ("laravel", "devicon-laravel-plain"),
    ("ruby", "devicon-ruby-plain"),
    ("rails", "devicon-rails-plain"),
    ("go", "devicon-go-plain"),
    ("rust", "devicon-rust-plain"),
    ("c", "devicon-c-plain"),
    ("c++", "devicon-cplusplus-plain"),
    ("c#", "devicon-csharp-plain"),
    // Database
    ("mongodb", "devicon-mongodb-plain"),
    ("mysql", "devicon-mysql-plain"),
    ("postgresql", "devicon-postgresql-plain"),
    ("redis", "devicon-redis-plain"),
    ("sqlite", "devicon-sqlite-plain"),
    ("firebase", "devicon-firebase-plain"),
    ("prisma", "devicon-prisma-original"),
    // DevOps & tools
    ("docker", "devicon-docker-plain"),
    ("kubernetes", "devicon-kubernetes-plain"),
    ("git", "devicon-git-plain"),
    ("github", "devicon-github-original"),
    ("github actions", "devicon-github-original"),
    ("gitlab", "devicon-gitlab-plain"),
    ("aws", "devicon-amazonwebservices-original"),
    ("azure", "devicon-azure-plain"),
    ("linux", "devicon-linux-plain"),
    ("nginx", "devicon-nginx-original"),
    ("webpack", "devicon-webpack-plain"),
    ("vscode", "devicon-vscode-plain"),
    ("vs code", "devicon-vscode-plain"),
    ("figma", "devicon-figma-plain"),
    // Mobile
    ("react native", "devicon-react-original"),
    ("flutter", "devicon-flutter-plain"),
    ("swift", "devicon-swift-plain"),
    ("kotlin", "devicon-kotlin-plain"),
    // AI/ML
    ("tensorflow", "devicon-tensorflow-original"),
    ("pytorch", "devicon-pytorch-original"),
    ("pandas", "devicon-pandas-original"),
    ("numpy", "devicon-numpy-original"),
];

/// Case-insensitive exact lookup. Whitespace or punctuation variants do not
/// match and render as a plain label.
pub fn devicon_class(skill: &str) -> Option<&'static str> {
    let key = skill.to_lowercase();
    DEVICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, class)| *class)
}

pub fn render(page: &mut Page, portfolio: &Portfolio) -> Result<(), String> {
    let groups = match portfolio.skills.as_deref() {
        Some(groups) if !groups.is_empty() => groups,
        _ => return page.hide(ids::SKILLS),
    };

    let html = Markup::concat(groups.iter().map(render_group));
    page.element_mut(ids::SKILLS_GRID)?.set_content(html);
    Ok(())
}

fn render_group(group: &SkillGroup) -> Markup {
    Node::new("div")
        .class("skill-group")
        .child(Node::new("h3").text(&group.group))
        .child(
            Node::new("div")
                .class("skill-items")
                .children(group.items.iter().map(|item| skill_tag(item))),
        )
        .build()
}

fn skill_tag(item: &str) -> Markup {
    let mut tag = Node::new("span").class("skill-tag");
    if let Some(class) = devicon_class(item) {
        tag = tag.child(Node::new("i").class(class));
    }
    tag.text(item).build()
}
