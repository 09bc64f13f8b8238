use super::*;

macro_rules! impl_report_repo {
    ($db:ident) => {
        impl<'a> ReportRepo for $db<'a> {
            fn create_report(&self, report: &NewReport) -> Result<Id> {
                create_report(&mut self.conn.borrow_mut(), report)
            }
            fn delete_report(&self, id: Id) -> Result<()> {
                delete_report(&mut self.conn.borrow_mut(), id)
            }

            fn get_report(&self, id: Id) -> Result<Report> {
                get_report(&mut self.conn.borrow_mut(), id)
            }
            fn load_reports_of_restaurant(
                &self,
                restaurant_id: Id,
                category: Option<ReportCategory>,
            ) -> Result<Vec<Report>> {
                load_reports_of_restaurant(&mut self.conn.borrow_mut(), restaurant_id, category)
            }
        }
    };
}

impl_report_repo!(DbReadWrite);
impl_report_repo!(DbConnection);

impl<'a> ReportRepo for DbReadOnly<'a> {
    fn create_report(&self, _report: &NewReport) -> Result<Id> {
        Err(read_only_violation("create_report"))
    }
    fn delete_report(&self, _id: Id) -> Result<()> {
        Err(read_only_violation("delete_report"))
    }

    fn get_report(&self, id: Id) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }
    fn load_reports_of_restaurant(
        &self,
        restaurant_id: Id,
        category: Option<ReportCategory>,
    ) -> Result<Vec<Report>> {
        load_reports_of_restaurant(&mut self.conn.borrow_mut(), restaurant_id, category)
    }
}

fn create_report(conn: &mut SqliteConnection, r: &NewReport) -> Result<Id> {
    let new_report = models::NewReport::try_from(r).map_err(repo::Error::Other)?;
    diesel::insert_into(schema::reports::table)
        .values(&new_report)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn delete_report(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::reports::dsl;
    let count = diesel::delete(dsl::reports.filter(dsl::id.eq(id.to_i64())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_report(conn: &mut SqliteConnection, id: Id) -> Result<Report> {
    use schema::reports::dsl;
    let entity = dsl::reports
        .filter(dsl::id.eq(id.to_i64()))
        .first::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?;
    Report::try_from(entity).map_err(repo::Error::Other)
}

fn load_reports_of_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: Id,
    category: Option<ReportCategory>,
) -> Result<Vec<Report>> {
    use schema::reports::dsl;
    let mut query = dsl::reports
        .filter(dsl::restaurant_id.eq(restaurant_id.to_i64()))
        .order_by(dsl::id)
        .into_boxed();
    if let Some(category) = category {
        let category = models::store_report_category(category).map_err(repo::Error::Other)?;
        query = query.filter(dsl::category.eq(category));
    }
    query
        .load::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|e| Report::try_from(e).map_err(repo::Error::Other))
        .collect()
}
