use std::time::Duration;

use gitlive_layout::{
    Attr, AttrSet, Color, Direction, Layout, Node, Padding, Pen, Result, Wrap,
};

/// Header bars: black text on a white background.
const TITLE: Color = Color::Pair {
    fg: Pen::Black,
    bg: Pen::White,
};
/// Entries staged in the index.
const STAGED: Color = Color::Green;
/// Work tree changes not yet staged.
const NOT_STAGED: Color = Color::Red;
/// Files git does not track.
const UNTRACKED: Color = Color::Red;
/// Abbreviated commit hashes.
const COMMIT_HASH: Color = Color::Blue;

/// What happened to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A new file.
    New,
    /// A file moved from another path.
    Renamed,
    /// A file with modified content.
    Modified,
    /// A removed file.
    Deleted,
}

impl ChangeKind {
    /// The label shown before the path.
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Renamed => "renamed",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
        }
    }
}

/// One entry of the status listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Kind of change.
    pub kind: ChangeKind,
    /// Path relative to the directory the dashboard is attached to.
    pub path: String,
    /// Previous path, when the file moved.
    pub from: Option<String>,
}

impl Change {
    /// A change to a single path.
    pub fn new(kind: ChangeKind, path: &str) -> Self {
        Self {
            kind,
            path: path.into(),
            from: None,
        }
    }

    /// A file moved from `from` to `to`.
    pub fn renamed(from: &str, to: &str) -> Self {
        Self {
            kind: ChangeKind::Renamed,
            path: to.into(),
            from: Some(from.into()),
        }
    }

    /// The text of the status line.
    pub fn line(&self) -> String {
        match &self.from {
            Some(from) => format!("   {}: {}->{}", self.kind.label(), from, self.path),
            None => format!("   {}: {}", self.kind.label(), self.path),
        }
    }
}

/// A recently checked out branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Branch name.
    pub name: String,
    /// The command that returns to it.
    pub checkout: String,
}

impl Branch {
    /// A branch that was checked out `back` checkouts ago.
    pub fn new(name: &str, back: usize) -> Self {
        let checkout = if back == 1 {
            "git checkout -".to_string()
        } else {
            format!("git checkout @{{-{back}}}")
        };
        Self {
            name: name.into(),
            checkout,
        }
    }
}

/// A commit in the recent history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Abbreviated hash.
    pub hash: String,
    /// First line of the message.
    pub title: String,
    /// Committer name.
    pub author: String,
    /// Time since the commit was made.
    pub age: Duration,
}

/// Everything the dashboard shows, collected once per refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Identifier other shells use to attach to this dashboard.
    pub session_id: String,
    /// Whether a shell is attached.
    pub attached: bool,
    /// Short name of HEAD.
    pub head: String,
    /// Work tree path.
    pub workdir: String,
    /// Changes staged in the index.
    pub staged: Vec<Change>,
    /// Unstaged changes to tracked files.
    pub changed: Vec<Change>,
    /// Untracked files.
    pub untracked: Vec<Change>,
    /// Recently checked out branches, most recent first. The first entry is
    /// the current branch and is not listed.
    pub branches: Vec<Branch>,
    /// Recent commits, newest first.
    pub commits: Vec<Commit>,
}

impl Snapshot {
    /// A fixed snapshot of a small repository.
    pub fn sample() -> Self {
        let minutes = |m: u64| Duration::from_secs(m * 60);
        let commit = |hash: &str, title: &str, author: &str, age: Duration| Commit {
            hash: hash.into(),
            title: title.into(),
            author: author.into(),
            age,
        };
        Self {
            session_id: "k3f9".into(),
            attached: true,
            head: "wrap-search".into(),
            workdir: "/home/dev/git-live/".into(),
            staged: vec![
                Change::new(ChangeKind::Modified, "lib/layout/layout.c"),
                Change::renamed("src/timer.c", "src/timing.c"),
            ],
            changed: vec![Change::new(ChangeKind::Modified, "src/dashboard.c")],
            untracked: vec![
                Change::new(ChangeKind::New, "notes.txt"),
                Change::new(ChangeKind::New, "tests/test_wrap.py"),
            ],
            branches: vec![
                Branch::new("wrap-search", 0),
                Branch::new("main", 1),
                Branch::new("attach-session", 2),
                Branch::new("ncurses-colors", 3),
            ],
            commits: vec![
                commit("3fa1", "Reset line height between wrapped lines", "dana", minutes(0)),
                commit("9c04", "Add padding to layout nodes", "dana", minutes(42)),
                commit("b7e2", "Watch the work tree with inotify", "lee", minutes(60 * 5)),
                commit("11d8", "Initial dashboard", "lee", minutes(60 * 24 * 9)),
            ],
        }
    }

    /// Age every commit by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        for c in &mut self.commits {
            c.age += elapsed;
        }
    }
}

/// Render an age the way the commit list shows it.
pub fn relative_time(age: Duration) -> String {
    let secs = age.as_secs();
    match secs {
        s if s < 60 => "now".into(),
        s if s < 60 * 60 => format!("{} minutes ago", s / 60),
        s if s < 60 * 60 * 24 => format!("{} hours ago", s / 60 / 60),
        s if s < 60 * 60 * 24 * 7 => format!("{} days ago", s / 60 / 60 / 24),
        s => format!("{} weeks ago", s / 60 / 60 / 24 / 7),
    }
}

/// Append a one-row title bar.
fn header(root: &mut Node) -> Result<&mut Node> {
    Ok(root
        .append_child()?
        .with_basis(1)
        .with_padding(Padding::left(1))
        .with_color(TITLE))
}

/// The top bar: branch on the left, session title centered, work tree on the
/// right.
fn top_header(root: &mut Node, snap: &Snapshot) -> Result<()> {
    let bar = header(root)?.with_direction(Direction::Columns);

    let left = bar
        .append_child()?
        .with_expand(1)
        .with_direction(Direction::Columns);
    left.append_text("Status")?;
    let branch = left
        .append_child()?
        .with_expand(1)
        .with_padding(Padding::left(1))
        .with_direction(Direction::Columns);
    branch.append_text("(")?;
    branch.append_text(&snap.head)?;
    branch.append_text(")")?;

    let title = bar
        .append_child()?
        .with_fit_content(true)
        .with_padding(Padding::sides(1, 1))
        .with_direction(Direction::Columns);
    title.append_text("Git Live")?;
    title.append_text(" (session ")?;
    title.append_text(&snap.session_id)?;
    if snap.attached {
        title.append_text(" <attached>")?;
    }
    title.append_text(")")?;

    let right = bar
        .append_child()?
        .with_expand(1)
        .with_direction(Direction::Columns);
    right.append_child()?.with_expand(1);
    right.append_text(&snap.workdir)?;
    Ok(())
}

/// The status section: staged, changed and untracked files, flowing into
/// columns when they do not fit.
fn status(root: &mut Node, snap: &Snapshot) -> Result<()> {
    let list = root
        .append_child()?
        .with_expand(1)
        .with_direction(Direction::Rows)
        .with_wrap(Wrap::Wrap)
        .with_fit_content(true);
    for (title, entries, color) in [
        (" staged:", &snap.staged, STAGED),
        (" changed:", &snap.changed, NOT_STAGED),
        (" untracked:", &snap.untracked, UNTRACKED),
    ] {
        list.append_text(title)?;
        for e in entries {
            list.append_styled_text(&e.line(), Some(color), AttrSet::default())?;
        }
    }
    Ok(())
}

/// Branch names with the command that returns to each.
fn branches(root: &mut Node, snap: &Snapshot, height: u32) -> Result<()> {
    header(root)?.append_text("Latest Branches")?;
    let table = root
        .append_child()?
        .with_expand(1)
        .with_direction(Direction::Columns)
        .with_padding(Padding::left(1));
    let max = height.saturating_sub(2) as usize;

    let names = table
        .append_child()?
        .with_direction(Direction::Rows)
        .with_fit_content(true);
    for b in snap.branches.iter().take(max).skip(1) {
        names.append_text(&b.name)?;
    }
    let commands = table
        .append_child()?
        .with_direction(Direction::Rows)
        .with_padding(Padding::left(4))
        .with_expand(1);
    for b in snap.branches.iter().take(max).skip(1) {
        commands.append_styled_text(&b.checkout, None, AttrSet::new(Attr::Dim))?;
    }
    Ok(())
}

/// Recent commits as four columns: hash, title, author and age.
fn commits(root: &mut Node, snap: &Snapshot, height: u32) -> Result<()> {
    header(root)?.append_text("Commits")?;
    let table = root
        .append_child()?
        .with_expand(1)
        .with_direction(Direction::Columns)
        .with_padding(Padding::left(1));
    let max = (height / 3).saturating_sub(1).max(1) as usize;
    let shown = &snap.commits[..snap.commits.len().min(max)];

    let hashes = table.append_child()?.with_fit_content(true);
    for c in shown {
        hashes.append_styled_text(&c.hash, Some(COMMIT_HASH), AttrSet::new(Attr::Dim))?;
    }
    let titles = table
        .append_child()?
        .with_expand(1)
        .with_padding(Padding::left(1));
    for c in shown {
        titles.append_text(&c.title)?;
    }
    let authors = table
        .append_child()?
        .with_fit_content(true)
        .with_padding(Padding::left(1));
    for c in shown {
        authors.append_styled_text(&c.author, None, AttrSet::new(Attr::Dim))?;
    }
    let times = table
        .append_child()?
        .with_fit_content(true)
        .with_padding(Padding::sides(1, 1));
    for c in shown {
        times.append_text(&relative_time(c.age))?;
    }
    Ok(())
}

/// Rebuild the whole dashboard tree from a snapshot. `height` is the number
/// of rows available, which caps how many branches and commits are listed.
pub fn build_view(layout: &mut Layout, snap: &Snapshot, height: u32) -> Result<()> {
    layout.clear();
    let root = layout.root_mut();
    root.with_direction(Direction::Rows)
        .with_expand(1)
        .with_fit_content(true);

    top_header(root, snap)?;
    status(root, snap)?;
    branches(root, snap, height)?;
    commits(root, snap, height)?;
    tracing::debug!(
        sections = root.children().len(),
        staged = snap.staged.len(),
        commits = snap.commits.len(),
        "view rebuilt"
    );
    Ok(())
}
