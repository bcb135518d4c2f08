use super::prelude::*;

/// Loads the member with the given login name and creates
/// it on first use, e.g. for the import bot.
pub fn get_or_create_member<R: MemberRepo>(repo: &R, login_name: &str) -> Result<Member> {
    let login_name = login_name.trim();
    if login_name.is_empty() {
        return Err(Error::Name);
    }
    if let Some(member) = repo.try_get_member_by_login_name(login_name)? {
        return Ok(member);
    }
    let member = Member::new(login_name);
    repo.create_member(&member)?;
    log::info!("Created member '{}' ({})", member.login_name, member.id);
    Ok(member)
}
