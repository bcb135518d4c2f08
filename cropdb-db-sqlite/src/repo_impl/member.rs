use super::*;

fn create_member(conn: &mut SqliteConnection, member: &Member) -> Result<()> {
    diesel::insert_into(schema::members::table)
        .values(&models::NewMember {
            id: member.id.as_str(),
            login_name: &member.login_name,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_member_by_login_name(
    conn: &mut SqliteConnection,
    login_name: &str,
) -> Result<Option<Member>> {
    use schema::members::dsl;
    Ok(dsl::members
        .filter(dsl::login_name.eq(login_name))
        .first::<models::Member>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(
            |models::Member {
                 rowid: _,
                 id,
                 login_name,
             }| Member {
                id: id.into(),
                login_name,
            },
        ))
}

impl MemberRepo for DbReadOnly<'_> {
    fn create_member(&self, _member: &Member) -> Result<()> {
        unreachable!();
    }
    fn try_get_member_by_login_name(&self, login_name: &str) -> Result<Option<Member>> {
        try_get_member_by_login_name(&mut self.conn.borrow_mut(), login_name)
    }
}

impl MemberRepo for DbReadWrite<'_> {
    fn create_member(&self, member: &Member) -> Result<()> {
        create_member(&mut self.conn.borrow_mut(), member)
    }
    fn try_get_member_by_login_name(&self, login_name: &str) -> Result<Option<Member>> {
        try_get_member_by_login_name(&mut self.conn.borrow_mut(), login_name)
    }
}

impl MemberRepo for DbConnection<'_> {
    fn create_member(&self, member: &Member) -> Result<()> {
        create_member(&mut self.conn.borrow_mut(), member)
    }
    fn try_get_member_by_login_name(&self, login_name: &str) -> Result<Option<Member>> {
        try_get_member_by_login_name(&mut self.conn.borrow_mut(), login_name)
    }
}
