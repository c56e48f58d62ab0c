use crate::app::Quillnote;
use crate::cli::{AddArgs, EditArgs, ShowArgs};
use anyhow::{Context, Result};
use console::style;
use dialoguer::{Editor, Input};

// --- Handler Functions ---

pub async fn handle_list(app: Quillnote) -> Result<()> {
    let notes = app.notes().await;
    if notes.is_empty() {
        println!("{}", style("No notes").dim());
        return Ok(());
    }
    for note in notes {
        println!("{}", note.title());
    }
    Ok(())
}

pub async fn handle_add(args: AddArgs, app: Quillnote) -> Result<()> {
    let title = match args.title {
        Some(title) => title,
        None => Input::new()
            .with_prompt("Note Title")
            .allow_empty(true)
            .interact_text()?,
    };

    let note = app.add_note(&title).await.context("Note not saved")?;

    if let Some(text) = args.text {
        let mut editor = app.open_note(note.title()).await.context("Error opening note")?;
        editor.set_text(text);
        editor.save(&app.store).await.context("Note not saved")?;
    }

    println!(
        "{} {}",
        style("Created").green().bold(),
        note.location().display()
    );
    Ok(())
}

pub async fn handle_show(args: ShowArgs, app: Quillnote) -> Result<()> {
    let editor = app
        .open_note(&args.title)
        .await
        .context("Error opening note")?;
    println!("{}", editor.text());
    Ok(())
}

pub async fn handle_edit(args: EditArgs, app: Quillnote) -> Result<()> {
    let mut editor = app
        .open_note(&args.title)
        .await
        .context("Error opening note")?;

    let new_text = match args.text {
        Some(text) => text,
        // Hand the buffer to $EDITOR; keep the old text if the user bails.
        None => Editor::new()
            .edit(editor.text())?
            .unwrap_or_else(|| editor.text().to_string()),
    };

    editor.set_text(new_text);
    editor.save(&app.store).await.context("Note not saved")?;
    println!("{}", style("Note saved").green().bold());
    Ok(())
}
